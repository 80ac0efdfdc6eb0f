// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - search: fetch one user's repositories, print one page, exit
// - browse: interactive session (search, change page size, page around)
//
// Global flags (--api-url, --timeout, --verbose) apply to both.
// =============================================================================

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE};

#[derive(Parser, Debug)]
#[command(
    name = "repo-browser",
    version,
    about = "Browse a GitHub user's public repositories page by page",
    long_about = "repo-browser lists the public repositories of a GitHub user, \
                  split into pages you can step through from the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the GitHub REST API (use this for GitHub Enterprise)
    #[arg(long, global = true, env = "REPO_BROWSER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Give up on the request after this many seconds (default: wait indefinitely)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of a user's repositories
    ///
    /// Example: repo-browser search octocat --per-page 5 --page 2
    Search {
        /// GitHub username whose repositories to list
        username: String,

        /// Repositories per page (one of 5, 10, 20, 50)
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: usize,

        /// Which page to show
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Output the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session
    ///
    /// Example: repo-browser browse octocat
    Browse {
        /// Search for this user right away
        username: Option<String>,

        /// Starting page size (one of 5, 10, 20, 50)
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: usize,

        /// Output each view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
