use clap::{Parser, Subcommand};
use std::process::ExitCode;

use strongest_label::github::DEFAULT_API_URL;
use strongest_label::RunOptions;

/// Pick the highest-priority label of a pull request for GitHub Actions workflows.
#[derive(Debug, Parser)]
#[command(name = "strongest-label", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the strongest label and write it to the step outputs
    Run {
        /// Priority list; overrides the `labels` input
        #[arg(long)]
        labels: Option<String>,
        /// API token; overrides the `GitHubToken` input
        #[arg(long)]
        github_token: Option<String>,
        /// GitHub REST API base URL
        #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            labels,
            github_token,
            api_url,
        } => strongest_label::run_action(RunOptions {
            labels,
            github_token,
            api_url,
        }),
    }
}
