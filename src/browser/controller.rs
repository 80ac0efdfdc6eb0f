// src/browser/controller.rs
// =============================================================================
// RepositoryBrowser: the component that reacts to user actions.
//
// Actions:
// - search(username): fetch the user's repositories and show page 1
// - set_page_size(size): re-slice the fetched list, back to page 1
// - go_to_page(n) / next_page() / previous_page(): move within the list
//
// Every action leaves a fresh ViewState behind (see view.rs), and every
// error path replaces the view with a message, so a renderer never sees a
// stale "Loading..." or a half-drawn list.
//
// Overlapping searches:
// search() is split into begin_search / fetch / complete_search. Each
// begin_search hands out a RequestTicket with a new generation number, and
// complete_search drops any result whose ticket isn't the latest one. That
// way a slow, older response can't overwrite a newer search.
// =============================================================================

use tracing::{debug, error, info, warn};

use super::state::SearchState;
use super::view::{SearchStatus, ViewState};
use crate::config::BrowserConfig;
use crate::error::{BrowserError, FetchFailure};
use crate::github::{Repository, RepositorySource};

// Proof that a search was started; needed to complete it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    username: String,
}

impl RequestTicket {
    pub fn username(&self) -> &str {
        &self.username
    }
}

pub struct RepositoryBrowser<S: RepositorySource> {
    source: S,
    config: BrowserConfig,
    state: SearchState,
    view: ViewState,
    // Generation of the most recently issued ticket
    latest_generation: u64,
}

impl<S: RepositorySource> RepositoryBrowser<S> {
    pub fn new(source: S, config: &BrowserConfig) -> Self {
        RepositoryBrowser {
            source,
            config: config.clone(),
            state: SearchState::new(config.default_page_size),
            view: ViewState::idle(),
            latest_generation: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    // Fetch the user's repositories and show the first page
    //
    // Returns the status the view ended up in. Fetch and unexpected
    // failures come back as Err, but the view already shows their message.
    pub async fn search(&mut self, username: &str) -> Result<SearchStatus, BrowserError> {
        let ticket = self.begin_search(username)?;
        let outcome = self.fetch(&ticket).await;
        self.complete_search(ticket, outcome)
    }

    // Step 1: validate the username and switch the view to Loading
    pub fn begin_search(&mut self, username: &str) -> Result<RequestTicket, BrowserError> {
        let username = username.trim();

        if username.is_empty() {
            let err = BrowserError::empty_username();
            // Same as a failed fetch: the old list goes, and any search
            // still in flight is superseded
            self.latest_generation += 1;
            self.state = SearchState::new(self.state.per_page());
            self.view = ViewState::errored(None, &err);
            return Err(err);
        }

        info!("Fetching repositories for username: {}", username);

        self.latest_generation += 1;
        self.view = ViewState::loading(username);

        Ok(RequestTicket {
            generation: self.latest_generation,
            username: username.to_string(),
        })
    }

    // Step 2: the single network request. Doesn't touch browser state, so
    // it can run while the caller renders the Loading view.
    pub async fn fetch(&self, ticket: &RequestTicket) -> Result<Vec<Repository>, FetchFailure> {
        self.source.list_user_repositories(&ticket.username).await
    }

    // Step 3: apply the outcome, unless a newer search has started since
    pub fn complete_search(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<Repository>, FetchFailure>,
    ) -> Result<SearchStatus, BrowserError> {
        if ticket.generation != self.latest_generation {
            warn!(
                username = %ticket.username,
                generation = ticket.generation,
                latest = self.latest_generation,
                "discarding response from a superseded search"
            );
            return Ok(self.view.status);
        }

        let per_page = self.state.per_page();

        match outcome {
            Ok(repositories) if repositories.is_empty() => {
                info!(username = %ticket.username, "no repositories found");
                self.state = SearchState::with_results(ticket.username, Vec::new(), per_page);
                self.view = ViewState::empty(self.state.username());
                Ok(SearchStatus::EmptyResult)
            }
            Ok(repositories) => {
                debug!(username = %ticket.username, count = repositories.len(), "repositories fetched");
                self.state = SearchState::with_results(ticket.username, repositories, per_page);
                self.view = ViewState::rendered(&self.state);
                Ok(SearchStatus::Rendered)
            }
            Err(failure) => {
                error!("Error: {}", failure);
                let err = BrowserError::from(failure);
                // Drop the old list so nothing from the previous search can
                // be paged back into view
                self.state = SearchState::with_results(ticket.username, Vec::new(), per_page);
                self.view = ViewState::errored(Some(self.state.username()), &err);
                Err(err)
            }
        }
    }

    // Switch to another page size and go back to page 1
    //
    // Re-slices the list we already have instead of fetching it again.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), BrowserError> {
        if !self.config.is_allowed_page_size(size) {
            return Err(BrowserError::Validation(format!(
                "Page size must be one of: {}",
                self.config.page_sizes_label()
            )));
        }

        self.state.set_per_page(size);
        debug!(per_page = size, "page size changed");

        if !self.state.is_empty() {
            self.view = ViewState::rendered(&self.state);
        }
        Ok(())
    }

    // Show page `target`. Returns false, and changes nothing, when there is
    // no such page or nothing has been fetched yet.
    pub fn go_to_page(&mut self, target: usize) -> bool {
        if self.state.is_empty() || !self.state.go_to_page(target) {
            debug!(page = target, total = self.state.total_pages(), "ignoring page change");
            return false;
        }
        self.view = ViewState::rendered(&self.state);
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        // Page 1 -> target 0, which go_to_page ignores
        self.go_to_page(self.state.current_page().saturating_sub(1))
    }
}
