// src/github/fetch.rs
// =============================================================================
// This module fetches a user's repositories from the GitHub REST API.
//
// Strategy:
// - One GET to /users/{username}/repos?per_page=100
// - per_page=100 is the API maximum, so a single call covers most users
// - No Authorization header: we live with the unauthenticated rate limit
//
// The browser never talks to reqwest directly. It goes through the
// RepositorySource trait, which lets tests swap in a mock.
//
// Rust concepts:
// - async_trait: Traits can't have async methods on stable without help
// - mockall::automock: Generates MockRepositorySource for tests
// =============================================================================

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, warn};
use url::Url;

use super::repository::{parse_repositories, Repository};
use crate::config::{BrowserConfig, API_MAX_PER_PAGE};
use crate::error::FetchFailure;

// Anything that can list a user's repositories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn list_user_repositories(&self, username: &str) -> Result<Vec<Repository>, FetchFailure>;
}

// The real implementation, backed by reqwest
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_url: Url,
}

impl GithubClient {
    // Builds the HTTP client from config
    //
    // Only applies a timeout when one is configured; otherwise the request
    // waits for the transport to resolve or fail on its own.
    pub fn new(config: &BrowserConfig) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(GithubClient {
            client: builder.build()?,
            api_url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn list_user_repositories(&self, username: &str) -> Result<Vec<Repository>, FetchFailure> {
        let url = repos_url(&self.api_url, username)?;
        debug!(%url, "requesting repository list");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), username, "GitHub API returned an error status");
            return Err(FetchFailure::Status(status.as_u16()));
        }

        // Read the body as text first so decode errors and transport errors
        // stay distinguishable
        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        parse_repositories(&body).map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}

// Builds {api_url}/users/{username}/repos?per_page=100
//
// The username goes in as a single path segment, so characters like '/'
// or '?' get percent-encoded instead of changing the route.
//
// Example:
//   ("https://api.github.com", "octocat")
//     -> "https://api.github.com/users/octocat/repos?per_page=100"
fn repos_url(api_url: &Url, username: &str) -> Result<Url, FetchFailure> {
    let mut url = api_url.clone();

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| FetchFailure::Transport(format!("API URL cannot be a base: {}", api_url)))?;
        // Tolerate a trailing slash on the base (e.g. "https://ghe.local/api/v3/")
        segments.pop_if_empty();
        segments.extend(["users", username, "repos"]);
    }

    url.query_pairs_mut()
        .clear()
        .append_pair("per_page", &API_MAX_PER_PAGE.to_string());

    Ok(url)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why FetchFailure instead of anyhow here?
//    - The browser has to tell "HTTP 404" apart from "network down"
//    - Each shows a different message, so the caller needs to match on it
//    - anyhow is fine in main.rs where we only print the error
//
// 2. Why does the trait return owned Vec<Repository>?
//    - The browser keeps the full list in its state and slices it later
//    - Owning the data avoids tying the state's lifetime to the response
// -----------------------------------------------------------------------------
