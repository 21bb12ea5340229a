//! Pull request lookup against the GitHub REST API.

mod client;

pub use client::{GitHubClient, DEFAULT_API_URL};

use async_trait::async_trait;

use crate::domain::Repository;
use crate::protocol::PullRequest;

/// Number of recently updated closed pull requests searched for the merge commit.
pub const CLOSED_PULL_REQUEST_WINDOW: u8 = 20;

/// Errors raised while looking up the pull request for a push.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("repository is unknown (GITHUB_REPOSITORY is not set)")]
    MissingRepository,
    #[error("commit is unknown (GITHUB_SHA is not set)")]
    MissingSha,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GitHub API error: {status} - {body}")]
    Api { status: u16, body: String },
}

/// Source of recently closed pull requests.
#[async_trait]
pub trait PullRequestSource {
    /// List up to [`CLOSED_PULL_REQUEST_WINDOW`] closed pull requests of
    /// `repository`, most recently updated first.
    async fn recently_closed(
        &self,
        repository: &Repository,
        token: &str,
    ) -> Result<Vec<PullRequest>, LookupError>;
}

/// Find the pull request whose merge produced `sha`.
///
/// Returns `Ok(None)` when none of the listed pull requests matches; that is
/// the normal outcome for pushes that did not come from a merged pull request.
pub async fn find_merged_pull_request<S>(
    source: &S,
    repository: &Repository,
    token: &str,
    sha: &str,
) -> Result<Option<PullRequest>, LookupError>
where
    S: PullRequestSource + ?Sized,
{
    let pulls = source.recently_closed(repository, token).await?;
    tracing::debug!(count = pulls.len(), %repository, sha, "listed closed pull requests");
    Ok(pulls.into_iter().find(|pr| pr.is_merged_as(sha)))
}
