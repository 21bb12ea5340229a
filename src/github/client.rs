use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

use super::{LookupError, PullRequestSource, CLOSED_PULL_REQUEST_WINDOW};
use crate::domain::Repository;
use crate::protocol::PullRequest;

/// Public GitHub API endpoint; GitHub Enterprise runners set `GITHUB_API_URL`.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST client for the pulls endpoint.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("strongest-label/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PullRequestSource for GitHubClient {
    async fn recently_closed(
        &self,
        repository: &Repository,
        token: &str,
    ) -> Result<Vec<PullRequest>, LookupError> {
        let url = format!(
            "{}/repos/{}/{}/pulls",
            self.base_url, repository.owner, repository.name
        );
        tracing::debug!(%url, "listing closed pull requests");

        let per_page = CLOSED_PULL_REQUEST_WINDOW.to_string();
        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .query(&[
                ("state", "closed"),
                ("sort", "updated"),
                ("direction", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}
