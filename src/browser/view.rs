// src/browser/view.rs
// =============================================================================
// ViewState: an immutable snapshot of what the screen should show.
//
// The browser builds a new ViewState after every action and hands it to a
// renderer. Renderers never look at SearchState directly, so everything they
// need (cards, page controls, messages) is copied in here.
// =============================================================================

use serde::Serialize;

use super::state::SearchState;
use crate::error::BrowserError;
use crate::github::Repository;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const NO_RESULTS_MESSAGE: &str = "No repositories found.";

// Where we are in the Idle -> Loading -> {Rendered | EmptyResult | Errored} cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Idle,
    Loading,
    Rendered,
    EmptyResult,
    Errored,
}

// The Previous / 1 2 3 / Next row plus the "Page X of Y" line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub per_page: usize,
    /// Always 1..=total_pages, one control per page
    pub pages: Vec<usize>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    pub fn page_info(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub status: SearchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub cards: Vec<Repository>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationView>,
}

impl ViewState {
    pub fn idle() -> Self {
        ViewState::message_only(SearchStatus::Idle, None, None)
    }

    pub fn loading(username: &str) -> Self {
        ViewState::message_only(
            SearchStatus::Loading,
            Some(username.to_string()),
            Some(LOADING_MESSAGE.to_string()),
        )
    }

    pub fn empty(username: &str) -> Self {
        ViewState::message_only(
            SearchStatus::EmptyResult,
            Some(username.to_string()),
            Some(NO_RESULTS_MESSAGE.to_string()),
        )
    }

    pub fn errored(username: Option<&str>, error: &BrowserError) -> Self {
        ViewState::message_only(
            SearchStatus::Errored,
            username.map(str::to_string),
            Some(error.user_message().to_string()),
        )
    }

    // Cards and controls for the current page of a non-empty state
    pub fn rendered(state: &SearchState) -> Self {
        let current_page = state.current_page();
        let total_pages = state.total_pages();

        ViewState {
            status: SearchStatus::Rendered,
            username: Some(state.username().to_string()),
            message: None,
            cards: state.current_slice().to_vec(),
            pagination: Some(PaginationView {
                current_page,
                total_pages,
                per_page: state.per_page(),
                pages: (1..=total_pages).collect(),
                previous_enabled: current_page > 1,
                next_enabled: current_page < total_pages,
            }),
        }
    }

    fn message_only(status: SearchStatus, username: Option<String>, message: Option<String>) -> Self {
        ViewState {
            status,
            username,
            message,
            cards: Vec::new(),
            pagination: None,
        }
    }
}
