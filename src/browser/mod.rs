// src/browser/mod.rs
// =============================================================================
// The repository browser component.
//
// Submodules:
// - state: SearchState and the pagination math (no I/O)
// - view: ViewState, the immutable snapshot handed to renderers
// - controller: RepositoryBrowser, which ties a RepositorySource to the state
// =============================================================================

mod controller;
pub(crate) mod state;
mod view;

pub use controller::RepositoryBrowser;
pub use view::{PaginationView, SearchStatus, ViewState};
