use serde::Deserialize;

/// The subset of a pull request this action reads.
///
/// Shared by the webhook event payload and the REST API list response;
/// both use the same snake_case field names. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PullRequest {
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub labels: Vec<PullRequestLabel>,
    /// `null` on the API for pull requests closed without merging.
    #[serde(default)]
    pub merge_commit_sha: Option<String>,
}

/// A label attached to a pull request.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PullRequestLabel {
    pub name: String,
}

/// The triggering event payload read from `GITHUB_EVENT_PATH`.
///
/// Only `pull_request`, `pull_request_target` and similar events carry a
/// pull request; for `push` the field is absent.
#[derive(Debug, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

impl PullRequest {
    /// Whether any attached label has exactly this name.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }

    pub fn is_merged_as(&self, sha: &str) -> bool {
        self.merge_commit_sha.as_deref() == Some(sha)
    }
}
