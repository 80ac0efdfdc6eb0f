// src/browser/state.rs
// =============================================================================
// SearchState: everything the browser remembers between user actions.
//
// All the pagination arithmetic lives here as plain functions with no I/O,
// so it can be tested without a network or a terminal.
//
// Invariants:
// - per_page >= 1
// - 1 <= current_page <= total_pages()
// - total_pages() == ceil(len / per_page), or 1 for an empty list
// =============================================================================

use std::ops::Range;

use crate::github::Repository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    username: String,
    current_page: usize,
    per_page: usize,
    repositories: Vec<Repository>,
}

impl SearchState {
    // Fresh state before any search has completed
    pub fn new(per_page: usize) -> Self {
        SearchState::with_results(String::new(), Vec::new(), per_page)
    }

    // State after a search completes; always starts on page 1
    pub fn with_results(username: String, repositories: Vec<Repository>, per_page: usize) -> Self {
        SearchState {
            username,
            current_page: 1,
            per_page: per_page.max(1),
            repositories,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.repositories.len(), self.per_page)
    }

    // The repositories shown on the current page
    pub fn current_slice(&self) -> &[Repository] {
        &self.repositories[page_bounds(self.current_page, self.per_page, self.repositories.len())]
    }

    // Moves to `target` if it exists. Returns false (and changes nothing)
    // when the target is outside 1..=total_pages.
    pub fn go_to_page(&mut self, target: usize) -> bool {
        if target < 1 || target > self.total_pages() {
            return false;
        }
        self.current_page = target;
        true
    }

    // Changes the page size and jumps back to page 1
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.current_page = 1;
    }
}

// ceil(len / per_page), with an empty list still counting as one page
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if len == 0 {
        return 1;
    }
    len.div_ceil(per_page.max(1))
}

// Index range [ (page-1)*per_page, page*per_page ) clamped to the list length
//
// Example: page 3, per_page 10, len 25 -> 20..25
pub fn page_bounds(page: usize, per_page: usize, len: usize) -> Range<usize> {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(len);
    let end = start.saturating_add(per_page).min(len);
    start..end
}

#[cfg(test)]
pub(crate) fn sample_repositories(count: usize) -> Vec<Repository> {
    (0..count)
        .map(|i| Repository {
            name: format!("repo-{}", i),
            description: Some(format!("Repository number {}", i)),
            star_count: i as u64,
            topics: vec![],
            url: format!("https://github.com/octocat/repo-{}", i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(slice: &[Repository]) -> Vec<String> {
        slice.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(100, 5), 20);
    }

    #[test]
    fn test_pages_reconstruct_the_list() {
        for len in 1..=37 {
            for per_page in [1, 3, 5, 10, 20, 50] {
                let repos = sample_repositories(len);
                let mut state = SearchState::with_results("octocat".into(), repos.clone(), per_page);

                let pages = state.total_pages();
                assert_eq!(pages, (len + per_page - 1) / per_page);

                let mut rebuilt = Vec::new();
                for page in 1..=pages {
                    assert!(state.go_to_page(page));
                    let slice = state.current_slice();
                    assert!(!slice.is_empty());
                    assert!(slice.len() <= per_page);
                    rebuilt.extend_from_slice(slice);
                }
                assert_eq!(rebuilt, repos, "len={} per_page={}", len, per_page);
            }
        }
    }

    #[test]
    fn test_twenty_five_by_ten() {
        let repos = sample_repositories(25);
        let mut state = SearchState::with_results("octocat".into(), repos.clone(), 10);

        assert_eq!(state.current_slice(), &repos[0..10]);
        state.go_to_page(2);
        assert_eq!(state.current_slice(), &repos[10..20]);
        state.go_to_page(3);
        assert_eq!(state.current_slice(), &repos[20..25]);
        assert_eq!(names(state.current_slice()).last().unwrap(), "repo-24");
    }

    #[test]
    fn test_go_to_page_out_of_range_is_noop() {
        let mut state = SearchState::with_results("octocat".into(), sample_repositories(25), 10);
        state.go_to_page(2);
        let before = state.clone();

        assert!(!state.go_to_page(0));
        assert!(!state.go_to_page(4));
        assert!(!state.go_to_page(usize::MAX));
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_per_page_resets_to_first_page() {
        let mut state = SearchState::with_results("octocat".into(), sample_repositories(25), 5);
        state.go_to_page(4);
        assert_eq!(state.current_page(), 4);

        state.set_per_page(20);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.current_slice().len(), 20);
    }

    #[test]
    fn test_empty_state() {
        let state = SearchState::new(10);
        assert!(state.is_empty());
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page(), 1);
        assert!(state.current_slice().is_empty());
    }

    #[test]
    fn test_page_bounds_clamps() {
        assert_eq!(page_bounds(1, 10, 25), 0..10);
        assert_eq!(page_bounds(3, 10, 25), 20..25);
        assert_eq!(page_bounds(9, 10, 25), 25..25);
        assert_eq!(page_bounds(1, 0, 3), 0..1);
    }
}
