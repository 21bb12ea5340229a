pub mod command;
pub mod event;
pub mod output;

pub use event::{EventPayload, PullRequest, PullRequestLabel};
pub use output::{ErrorCode, ERROR_OUTPUT, LABEL_NAME_OUTPUT, LABEL_VALUE_OUTPUT};
