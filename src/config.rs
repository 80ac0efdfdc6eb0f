// src/config.rs
// =============================================================================
// Runtime configuration for the browser.
//
// Values come from (highest priority first):
// 1. Command-line flags (see cli.rs)
// 2. Environment variables (REPO_BROWSER_API_URL, via clap's `env` feature)
// 3. The defaults below
//
// Rust concepts:
// - Default trait: A standard way to build a "sensible starting" value
// - Builder-style methods: `with_*` functions that consume and return Self
// =============================================================================

use anyhow::{anyhow, Result};
use std::time::Duration;
use url::Url;

// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// Options offered by the page-size dropdown
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];

// Dropdown selection when the page first loads
pub const DEFAULT_PAGE_SIZE: usize = 10;

// GitHub caps `per_page` at 100 for list endpoints
pub const API_MAX_PER_PAGE: usize = 100;

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Base URL of the REST API (no trailing path)
    pub api_url: Url,
    /// Page sizes the user may pick from
    pub page_sizes: Vec<usize>,
    /// Page size used until the user picks another one
    pub default_page_size: usize,
    /// Sent as the User-Agent header (GitHub rejects requests without one)
    pub user_agent: String,
    /// None = wait for the transport to resolve or fail
    pub timeout: Option<Duration>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            // Constant and known to be valid
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            user_agent: format!("repo-browser/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl BrowserConfig {
    /// Overrides the API base URL, rejecting anything that isn't http(s)
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self> {
        let parsed = Url::parse(api_url)
            .map_err(|e| anyhow!("Invalid API URL '{}': {}", api_url, e))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!("API URL must use http or https: {}", api_url));
        }
        if parsed.cannot_be_a_base() {
            return Err(anyhow!("API URL cannot be used as a base: {}", api_url));
        }

        self.api_url = parsed;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Picks the starting page size; it has to be one of the dropdown options
    pub fn with_default_page_size(mut self, size: usize) -> Result<Self> {
        if !self.is_allowed_page_size(size) {
            return Err(anyhow!(
                "Page size {} is not one of: {}",
                size,
                self.page_sizes_label()
            ));
        }
        self.default_page_size = size;
        Ok(self)
    }

    pub fn is_allowed_page_size(&self, size: usize) -> bool {
        self.page_sizes.contains(&size)
    }

    /// "5, 10, 20, 50" - used in help text and validation messages
    pub fn page_sizes_label(&self) -> String {
        self.page_sizes
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
