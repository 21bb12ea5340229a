
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::config::{LabelRule, LabelValue};
use crate::domain::{LabelName, Repository};
use crate::github::{LookupError, PullRequestSource};
use crate::protocol::{PullRequest, PullRequestLabel};

fn rule(name: &str, value: &str) -> LabelRule {
    LabelRule::new(LabelName::new(name).unwrap(), LabelValue::from(value))
}

fn rules_of(names: &[&str]) -> Vec<LabelRule> {
    names.iter().map(|n| rule(n, n)).collect()
}

fn pull_request(number: u64, merge_commit_sha: Option<&str>, labels: &[&str]) -> PullRequest {
    PullRequest {
        number,
        labels: labels
            .iter()
            .map(|name| PullRequestLabel {
                name: name.to_string(),
            })
            .collect(),
        merge_commit_sha: merge_commit_sha.map(String::from),
    }
}

fn repository() -> Repository {
    Repository::parse("testUser/testRepo").unwrap()
}

/// Returns a fixed listing and counts how often it was asked.
struct FixedSource {
    pulls: Vec<PullRequest>,
    calls: AtomicUsize,
}

impl FixedSource {
    fn new(pulls: Vec<PullRequest>) -> Self {
        FixedSource {
            pulls,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PullRequestSource for FixedSource {
    async fn recently_closed(
        &self,
        _repository: &Repository,
        _token: &str,
    ) -> Result<Vec<PullRequest>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pulls.clone())
    }
}

/// Always answers with an API error.
struct FailingSource;

#[async_trait]
impl PullRequestSource for FailingSource {
    async fn recently_closed(
        &self,
        _repository: &Repository,
        _token: &str,
    ) -> Result<Vec<PullRequest>, LookupError> {
        Err(LookupError::Api {
            status: 500,
            body: "boom".to_string(),
        })
    }
}
