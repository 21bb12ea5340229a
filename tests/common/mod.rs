// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const REPOSITORY: &str = "testUser/testRepo";
pub const MERGE_SHA: &str = "CommitSHA";
pub const PULLS_PATH: &str = "/repos/testUser/testRepo/pulls";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_strongest-label"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// Start a mock API that answers the closed pull request listing with
/// `closed_pull_requests.json`.
pub async fn mock_api() -> MockServer {
    let server = MockServer::start().await;
    let body: serde_json::Value =
        serde_json::from_str(&load_fixture("closed_pull_requests.json")).unwrap();
    Mock::given(method("GET"))
        .and(path(PULLS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Result of one binary invocation.
pub struct ActionRun {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Entries written to `$GITHUB_OUTPUT`, or parsed from legacy
    /// `::set-output` commands when no output file was configured.
    pub outputs: HashMap<String, String>,
}

/// Environment of a simulated runner. Starts from an empty environment so
/// the host's own `GITHUB_*` variables never leak into a test.
pub struct ActionEnv {
    vars: Vec<(String, String)>,
    args: Vec<String>,
    output_file: Option<NamedTempFile>,
}

impl ActionEnv {
    pub fn new() -> Self {
        let output_file = NamedTempFile::new().expect("failed to create output file");
        let mut env = ActionEnv {
            vars: Vec::new(),
            args: Vec::new(),
            output_file: None,
        };
        env = env.var("GITHUB_OUTPUT", output_file.path().to_str().unwrap());
        env.output_file = Some(output_file);
        env
    }

    /// A push run against `api_url` for commit [`MERGE_SHA`].
    pub fn push(api_url: &str) -> Self {
        Self::new()
            .var("GITHUB_REPOSITORY", REPOSITORY)
            .var("GITHUB_SHA", MERGE_SHA)
            .var("GITHUB_API_URL", api_url)
            .var(
                "GITHUB_EVENT_PATH",
                fixture_path("push_event.json").to_str().unwrap(),
            )
    }

    /// A pull_request run whose event carries `pull_request_event.json`.
    pub fn pull_request_event(api_url: &str) -> Self {
        Self::new()
            .var("GITHUB_REPOSITORY", REPOSITORY)
            .var("GITHUB_SHA", "HeadSHA")
            .var("GITHUB_API_URL", api_url)
            .var(
                "GITHUB_EVENT_PATH",
                fixture_path("pull_request_event.json").to_str().unwrap(),
            )
    }

    pub fn var(mut self, key: &str, value: &str) -> Self {
        self.vars.retain(|(k, _)| k != key);
        self.vars.push((key.to_string(), value.to_string()));
        self
    }

    pub fn input(self, name: &str, value: &str) -> Self {
        let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
        self.var(&key, value)
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Drop `$GITHUB_OUTPUT` so outputs fall back to `::set-output` commands.
    pub fn without_output_file(mut self) -> Self {
        self.vars.retain(|(k, _)| k != "GITHUB_OUTPUT");
        self.output_file = None;
        self
    }

    /// Run `strongest-label run` and collect what it reported.
    pub fn run(&self) -> ActionRun {
        let output = Command::new(binary_path())
            .arg("run")
            .args(&self.args)
            .env_clear()
            .envs(self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .expect("failed to execute binary");

        let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
        let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
        let exit_code = output.status.code().unwrap_or(-1);
        let outputs = match &self.output_file {
            Some(file) => {
                let content = std::fs::read_to_string(file.path()).expect("output file");
                parse_output_file(&content)
            }
            None => parse_set_output_commands(&stdout),
        };

        ActionRun {
            stdout,
            stderr,
            exit_code,
            outputs,
        }
    }

    /// [`ActionEnv::run`] off the async runtime, so a mock server on the
    /// same runtime keeps answering while the binary waits on it.
    pub async fn run_async(self) -> ActionRun {
        tokio::task::spawn_blocking(move || self.run())
            .await
            .expect("binary run panicked")
    }
}

/// Parse `name<<delimiter` blocks. Later entries overwrite earlier ones.
pub fn parse_output_file(content: &str) -> HashMap<String, String> {
    let mut outputs = HashMap::new();
    let mut lines = content.lines();
    while let Some(line) = lines.next() {
        let (name, delimiter) = line
            .split_once("<<")
            .unwrap_or_else(|| panic!("unexpected output file line: {line}"));
        let mut value = Vec::new();
        for body in lines.by_ref() {
            if body == delimiter {
                break;
            }
            value.push(body);
        }
        outputs.insert(name.to_string(), value.join("\n"));
    }
    outputs
}

/// Parse `::set-output name=<name>::<value>` lines from stdout.
pub fn parse_set_output_commands(stdout: &str) -> HashMap<String, String> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix("::set-output name="))
        .filter_map(|rest| rest.split_once("::"))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
