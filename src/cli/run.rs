use std::process::ExitCode;

use crate::context::{ActionContext, GitHubContext};
use crate::github::GitHubClient;
use crate::resolve::{self, LABELS_INPUT, TOKEN_INPUT};

/// Options of the `run` subcommand.
///
/// Inputs given here take precedence over the `INPUT_*` environment
/// variables the runner sets.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub labels: Option<String>,
    pub github_token: Option<String>,
    pub api_url: String,
}

/// Execute the `run` subcommand against the GitHub Actions environment.
///
/// Expected outcomes (no pull request, no wanted label) exit successfully
/// with the `error` output set. Fatal errors have already been reported to
/// the runner as a failed step; they are also rendered to stderr.
pub fn run(options: RunOptions) -> ExitCode {
    let mut ctx = GitHubContext::from_env();
    if let Some(labels) = &options.labels {
        ctx = ctx.with_input(LABELS_INPUT, labels);
    }
    if let Some(token) = &options.github_token {
        ctx = ctx.with_input(TOKEN_INPUT, token);
    }

    let client = match GitHubClient::new(&options.api_url) {
        Ok(client) => client,
        Err(e) => {
            ctx.set_failed(&format!("Failed to create GitHub client: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            ctx.set_failed(&format!("Failed to start async runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(resolve::run(&mut ctx, &client)) {
        Ok(resolution) => {
            tracing::debug!(error_code = %resolution.error_code(), "run finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}
