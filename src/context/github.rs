use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::ActionContext;
use crate::domain::Repository;
use crate::protocol::command::{file_command_entry, workflow_command};
use crate::protocol::{EventPayload, PullRequest};

/// The GitHub Actions runner environment.
///
/// Built from a snapshot of environment variables: `INPUT_*` for inputs,
/// `GITHUB_EVENT_PATH`, `GITHUB_SHA`, `GITHUB_REPOSITORY` for the run and
/// `GITHUB_OUTPUT` for outputs. Logs are written to stdout as workflow
/// commands.
#[derive(Debug)]
pub struct GitHubContext {
    env: HashMap<String, String>,
    overrides: HashMap<String, String>,
    event: EventPayload,
    repository: Option<Repository>,
    output_file: Option<PathBuf>,
    failed: bool,
}

impl GitHubContext {
    /// Snapshot the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build from explicit variables. The event file is read here.
    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env: HashMap<String, String> = vars.into_iter().collect();
        let event = env
            .get("GITHUB_EVENT_PATH")
            .filter(|p| !p.is_empty())
            .map(|p| load_event(Path::new(p)))
            .unwrap_or_default();
        let repository = env.get("GITHUB_REPOSITORY").and_then(|slug| {
            let parsed = Repository::parse(slug);
            if parsed.is_none() {
                tracing::warn!(slug = %slug, "GITHUB_REPOSITORY is not an owner/name slug");
            }
            parsed
        });
        let output_file = env
            .get("GITHUB_OUTPUT")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        GitHubContext {
            env,
            overrides: HashMap::new(),
            event,
            repository,
            output_file,
            failed: false,
        }
    }

    /// Set an input value that takes precedence over its `INPUT_*` variable.
    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.overrides.insert(name.to_string(), value.to_string());
        self
    }

    /// Whether [`ActionContext::set_failed`] has been called.
    pub fn failed(&self) -> bool {
        self.failed
    }

    fn append_output(&self, path: &Path, name: &str, value: &str) -> std::io::Result<()> {
        let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
        let entry = file_command_entry(name, value, &delimiter).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("output '{name}' contains the heredoc delimiter"),
            )
        })?;
        let mut file = OpenOptions::new().append(true).create(true).open(path)?;
        file.write_all(entry.as_bytes())
    }
}

/// Name of the variable holding an input, as the runner sets it.
fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Read the event payload. A missing or malformed file means no event data.
fn load_event(path: &Path) -> EventPayload {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no event payload");
            return EventPayload::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "ignoring malformed event payload");
        EventPayload::default()
    })
}

impl ActionContext for GitHubContext {
    fn input(&self, name: &str) -> String {
        self.overrides
            .get(name)
            .or_else(|| self.env.get(&input_variable(name)))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    fn pull_request(&self) -> Option<&PullRequest> {
        self.event.pull_request.as_ref()
    }

    fn sha(&self) -> Option<&str> {
        self.env
            .get("GITHUB_SHA")
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    fn repository(&self) -> Option<&Repository> {
        self.repository.as_ref()
    }

    fn set_output(&mut self, name: &str, value: &str) -> std::io::Result<()> {
        match &self.output_file {
            Some(path) => self.append_output(path, name, value),
            None => {
                println!("{}", workflow_command("set-output", &[("name", name)], value));
                Ok(())
            }
        }
    }

    fn info(&mut self, message: &str) {
        println!("{message}");
    }

    fn warning(&mut self, message: &str) {
        println!("{}", workflow_command("warning", &[], message));
    }

    fn error(&mut self, message: &str) {
        println!("{}", workflow_command("error", &[], message));
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        self.error(message);
    }
}
