//! The execution context the resolver talks to.
//!
//! Everything the action reads from or reports to its host goes through
//! [`ActionContext`]: inputs, the triggering event, outputs, step logs and
//! the failure signal. [`GitHubContext`] is the real GitHub Actions host;
//! [`RecordingContext`] keeps everything in memory.

mod github;
mod recording;

pub use github::GitHubContext;
pub use recording::{Record, RecordingContext};

use crate::domain::Repository;
use crate::protocol::PullRequest;

/// Capabilities of the host running the action.
pub trait ActionContext {
    /// Value of a named input, trimmed. Empty when the input is not set.
    fn input(&self, name: &str) -> String;

    /// Pull request attached to the triggering event, if any.
    fn pull_request(&self) -> Option<&PullRequest>;

    /// Commit the run was triggered for.
    fn sha(&self) -> Option<&str>;

    /// Repository the run belongs to.
    fn repository(&self) -> Option<&Repository>;

    fn set_output(&mut self, name: &str, value: &str) -> std::io::Result<()>;

    fn info(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// Mark the step as failed. The message is also logged at error level.
    fn set_failed(&mut self, message: &str);
}
