// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr so stdout stays clean for --json)
// 3. Build the config, the GitHub client and the browser
// 4. Dispatch to `search` (one page, then exit) or `browse` (interactive)
// 5. Exit with proper code (0 = shown, 1 = search failed, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod browser;       // src/browser/ - state, view snapshots, the browser itself
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - API URL, page sizes, timeout
mod error;         // src/error.rs - error types and user-facing messages
mod github;        // src/github/ - GitHub API client
mod render;        // src/render.rs - text and JSON output
mod session;       // src/session.rs - interactive browse loop

use anyhow::Result;
use clap::Parser;
use std::io;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use browser::{RepositoryBrowser, SearchStatus};
use cli::{Cli, Commands};
use config::BrowserConfig;
use github::{GithubClient, RepositorySource};
use render::{JsonSink, TextSink, ViewSink};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr. RUST_LOG wins over --verbose when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// Returns:
//   Ok(0) = repositories (or "No repositories found.") shown
//   Ok(1) = the search failed (bad username, HTTP error, network error)
//   Err   = couldn't even get started (bad config, stdout closed, ...)
async fn run(cli: Cli) -> Result<i32> {
    let base = BrowserConfig::default()
        .with_api_url(&cli.api_url)?
        .with_timeout(cli.timeout.map(Duration::from_secs));

    match cli.command {
        Commands::Search { username, per_page, page, json } => {
            let config = base.with_default_page_size(per_page)?;
            let client = GithubClient::new(&config)?;
            let mut sink = make_sink(json);
            handle_search(client, &config, sink.as_mut(), &username, page).await
        }
        Commands::Browse { username, per_page, json } => {
            let config = base.with_default_page_size(per_page)?;
            let mut sink = make_sink(json);
            handle_browse(&config, sink.as_mut(), username.as_deref()).await
        }
    }
}

fn make_sink(json: bool) -> Box<dyn ViewSink> {
    if json {
        Box::new(JsonSink::new(io::stdout()))
    } else {
        Box::new(TextSink::new(io::stdout()))
    }
}

// Handles the 'search' subcommand: one fetch, one render
//
// A page past the end falls back to page 1 (goToPage ignores it).
async fn handle_search<S, K>(
    source: S,
    config: &BrowserConfig,
    sink: &mut K,
    username: &str,
    page: usize,
) -> Result<i32>
where
    S: RepositorySource,
    K: ViewSink + ?Sized,
{
    let mut browser = RepositoryBrowser::new(source, config);

    let status = browser.search(username).await;

    if matches!(status, Ok(SearchStatus::Rendered)) && page != 1 && !browser.go_to_page(page) {
        warn!(
            page,
            total = browser.state().total_pages(),
            "requested page does not exist, showing page 1"
        );
    }

    sink.render(browser.view())?;

    Ok(if status.is_ok() { 0 } else { 1 })
}

// Handles the 'browse' subcommand: commands come from stdin
async fn handle_browse(config: &BrowserConfig, sink: &mut dyn ViewSink, username: Option<&str>) -> Result<i32> {
    let client = GithubClient::new(config)?;
    let mut browser = RepositoryBrowser::new(client, config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());

    session::run_session(&mut browser, sink, stdin, username).await?;

    Ok(0)
}
