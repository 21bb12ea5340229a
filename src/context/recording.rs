use std::collections::HashMap;

use super::ActionContext;
use crate::domain::Repository;
use crate::protocol::PullRequest;

/// Something reported to a [`RecordingContext`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Output { name: String, value: String },
    Info(String),
    Warning(String),
    Error(String),
    Failed(String),
}

/// In-memory context: inputs and event data are supplied up front and every
/// report is appended to [`RecordingContext::records`].
///
/// # Examples
///
/// ```
/// use strongest_label::context::{ActionContext, RecordingContext};
///
/// let mut ctx = RecordingContext::new().with_input("labels", " a,1 ");
/// assert_eq!(ctx.input("labels"), "a,1");
///
/// ctx.set_output("error", "0").unwrap();
/// assert_eq!(ctx.output("error"), Some("0"));
/// ```
#[derive(Debug, Default)]
pub struct RecordingContext {
    inputs: HashMap<String, String>,
    pull_request: Option<PullRequest>,
    sha: Option<String>,
    repository: Option<Repository>,
    pub records: Vec<Record>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_pull_request(mut self, pull_request: PullRequest) -> Self {
        self.pull_request = Some(pull_request);
        self
    }

    pub fn with_sha(mut self, sha: &str) -> Self {
        self.sha = Some(sha.to_string());
        self
    }

    pub fn with_repository(mut self, repository: Repository) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Last value written to the named output.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.records.iter().rev().find_map(|r| match r {
            Record::Output { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn infos(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| match r {
                Record::Info(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| match r {
                Record::Warning(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| match r {
                Record::Error(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| match r {
                Record::Failed(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ActionContext for RecordingContext {
    fn input(&self, name: &str) -> String {
        self.inputs
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    fn pull_request(&self) -> Option<&PullRequest> {
        self.pull_request.as_ref()
    }

    fn sha(&self) -> Option<&str> {
        self.sha.as_deref()
    }

    fn repository(&self) -> Option<&Repository> {
        self.repository.as_ref()
    }

    fn set_output(&mut self, name: &str, value: &str) -> std::io::Result<()> {
        self.records.push(Record::Output {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn info(&mut self, message: &str) {
        self.records.push(Record::Info(message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.records.push(Record::Warning(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.records.push(Record::Error(message.to_string()));
    }

    fn set_failed(&mut self, message: &str) {
        self.records.push(Record::Failed(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_empty() {
        let ctx = RecordingContext::new();
        assert_eq!(ctx.input("labels"), "");
    }

    #[test]
    fn output_returns_latest_value() {
        let mut ctx = RecordingContext::new();
        ctx.set_output("error", "0").unwrap();
        ctx.set_output("error", "2").unwrap();
        assert_eq!(ctx.output("error"), Some("2"));
        assert_eq!(ctx.output("strongestLabelName"), None);
    }

    #[test]
    fn records_keep_call_order() {
        let mut ctx = RecordingContext::new();
        ctx.info("one");
        ctx.warning("two");
        ctx.set_failed("three");
        assert_eq!(
            ctx.records,
            vec![
                Record::Info("one".into()),
                Record::Warning("two".into()),
                Record::Failed("three".into()),
            ]
        );
        assert_eq!(ctx.failures(), vec!["three"]);
        assert!(ctx.errors().is_empty());
    }
}
