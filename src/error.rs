// src/error.rs
// =============================================================================
// Error types for the repository browser.
//
// Two layers:
// - FetchFailure: what went wrong while talking to the GitHub API
// - BrowserError: what the user sees (validation, fetch, unexpected)
//
// The browser turns every FetchFailure into a BrowserError, and every
// BrowserError carries a short message that is safe to print on screen.
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - From impls: Let the ? operator convert one error type into another
// =============================================================================

use thiserror::Error;

// Shown when the API answers with a non-success status code
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching repositories. Please try again.";

// Shown when the request never produced a usable response
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

// Shown when the search box is empty
pub const EMPTY_USERNAME_MESSAGE: &str = "Please enter a GitHub username.";

// Failures from the network layer (src/github/fetch.rs)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The server answered, but not with a 2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// Connection refused, DNS failure, timeout, ...
    #[error("transport error: {0}")]
    Transport(String),

    /// The body was not the JSON array we expected
    #[error("malformed response: {0}")]
    Decode(String),
}

// Errors produced by RepositoryBrowser operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    /// Bad user input, fixed by re-typing it
    #[error("{0}")]
    Validation(String),

    /// The API rejected the request (404 unknown user, 403 rate limit, ...)
    #[error("repository fetch failed with HTTP {status}")]
    Fetch { status: u16 },

    /// Anything else in the fetch/parse pipeline
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl BrowserError {
    /// The text that goes into the view for this error
    pub fn user_message(&self) -> &str {
        match self {
            BrowserError::Validation(message) => message,
            BrowserError::Fetch { .. } => FETCH_ERROR_MESSAGE,
            BrowserError::Unexpected(_) => UNEXPECTED_ERROR_MESSAGE,
        }
    }

    /// Convenience constructor for the empty-username case
    pub fn empty_username() -> Self {
        BrowserError::Validation(EMPTY_USERNAME_MESSAGE.to_string())
    }
}

impl From<FetchFailure> for BrowserError {
    fn from(failure: FetchFailure) -> Self {
        match failure {
            FetchFailure::Status(status) => BrowserError::Fetch { status },
            other => BrowserError::Unexpected(other.to_string()),
        }
    }
}
