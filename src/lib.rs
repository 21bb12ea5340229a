pub mod config;
pub mod context;
pub mod github;
pub mod protocol;
pub mod resolve;

pub(crate) mod cli;
pub mod domain;

pub use cli::run::RunOptions;

/// Run the `run` subcommand: resolve the strongest label for the current
/// GitHub Actions run and report it as step outputs.
///
/// This is the binary entry point. Embedders should drive
/// [`resolve::run`] with their own [`context::ActionContext`] instead.
pub fn run_action(options: RunOptions) -> std::process::ExitCode {
    cli::run::run(options)
}
