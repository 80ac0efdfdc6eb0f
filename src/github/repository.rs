// src/github/repository.rs
// =============================================================================
// The Repository record, and the JSON shape GitHub sends it in.
//
// GitHub's /users/{username}/repos endpoint returns an array of large
// objects (~100 fields each). We only decode the five we display and let
// serde ignore the rest.
// =============================================================================

use serde::{Deserialize, Serialize};

// One repository card's worth of data
//
// Immutable once built: the browser only ever slices a Vec of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub star_count: u64,
    /// Order as returned by the API
    pub topics: Vec<String>,
    /// Link to the repository's page on github.com
    pub url: String,
}

// The wire format, field names exactly as GitHub spells them
#[derive(Debug, Deserialize)]
pub(crate) struct ApiRepository {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    // Missing on some older API versions, null on a few mirrors
    #[serde(default)]
    topics: Option<Vec<String>>,
    html_url: String,
}

impl From<ApiRepository> for Repository {
    fn from(api: ApiRepository) -> Self {
        Repository {
            name: api.name,
            description: api.description,
            star_count: api.stargazers_count,
            topics: api.topics.unwrap_or_default(),
            url: api.html_url,
        }
    }
}

// Decodes a full response body into Repository records
pub(crate) fn parse_repositories(body: &str) -> serde_json::Result<Vec<Repository>> {
    let api_repos: Vec<ApiRepository> = serde_json::from_str(body)?;
    Ok(api_repos.into_iter().map(Repository::from).collect())
}
