// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - The Repository record we render on each card
// - Listing a user's public repositories (one request, up to 100 repos)
// - A RepositorySource trait so the browser can be tested without a network
//
// Not implemented (on purpose):
// - Authentication: requests count against the unauthenticated rate limit
// - Following the Link header for users with more than 100 repositories
// =============================================================================

mod fetch;
mod repository;

pub use fetch::{GithubClient, RepositorySource};
pub use repository::Repository;

#[cfg(test)]
pub use fetch::MockRepositorySource;
