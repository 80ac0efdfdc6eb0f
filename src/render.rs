// src/render.rs
// =============================================================================
// Turns ViewState snapshots into output.
//
// Two sinks:
// - TextSink: repository cards, page controls and "Page X of Y" as text
// - JsonSink: the snapshot itself, pretty-printed, for scripts and pipes
//
// Rendering is a pure function of the snapshot (render_text), so the
// exact output can be tested without capturing stdout.
// =============================================================================

use anyhow::Result;
use serde_json::json;
use std::fmt::Write as _;
use std::io::Write;

use crate::browser::{PaginationView, ViewState};
use crate::github::Repository;

pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_TOPICS: &str = "No topics available.";

// Anything that can display a view snapshot
pub trait ViewSink {
    fn render(&mut self, view: &ViewState) -> Result<()>;

    // One-off text that isn't part of the view (help, hints)
    fn notice(&mut self, message: &str) -> Result<()>;
}

// Human-readable output to any writer (usually stdout)
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        TextSink { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViewSink for TextSink<W> {
    fn render(&mut self, view: &ViewState) -> Result<()> {
        self.out.write_all(render_text(view).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }
}

// Pretty JSON, one document per render
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        JsonSink { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViewSink for JsonSink<W> {
    fn render(&mut self, view: &ViewState) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, view)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        serde_json::to_writer(&mut self.out, &json!({ "notice": message }))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

// Renders a whole snapshot as text
//
// Message views (loading, empty, error) render only their message.
// Idle renders nothing.
pub fn render_text(view: &ViewState) -> String {
    let mut out = String::new();

    if let Some(message) = &view.message {
        // Writing to a String can't fail
        let _ = writeln!(out, "{}", message);
    }

    for repo in &view.cards {
        out.push_str(&render_card(repo));
        out.push('\n');
    }

    if let Some(pagination) = &view.pagination {
        let _ = writeln!(out, "{}", render_controls(pagination));
        let _ = writeln!(out, "{}", pagination.page_info());
    }

    out
}

// One repository card
//
// Example:
//   Hello-World
//     No description available.
//     Stars: 5
//     Topics: No topics available.
//     View on GitHub: https://github.com/octocat/Hello-World
pub fn render_card(repo: &Repository) -> String {
    let description = repo
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION);

    // Fall back on the joined text, so a lone "" topic counts as none
    let mut topics = repo.topics.join(", ");
    if topics.is_empty() {
        topics = NO_TOPICS.to_string();
    }

    format!(
        "{}\n  {}\n  Stars: {}\n  Topics: {}\n  View on GitHub: {}\n",
        repo.name, description, repo.star_count, topics, repo.url
    )
}

// The navigation row: [Previous] [1] [*2*] [3] [Next]
//
// The current page is wrapped in asterisks, and a disabled control gets
// a "(disabled)" suffix.
pub fn render_controls(pagination: &PaginationView) -> String {
    let mut controls = Vec::with_capacity(pagination.pages.len() + 2);

    controls.push(control("Previous", pagination.previous_enabled));
    for &page in &pagination.pages {
        if page == pagination.current_page {
            controls.push(format!("[*{}*]", page));
        } else {
            controls.push(format!("[{}]", page));
        }
    }
    controls.push(control("Next", pagination.next_enabled));

    controls.join(" ")
}

fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}]", label)
    } else {
        format!("[{} (disabled)]", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::state::{sample_repositories, SearchState};
    use crate::error::BrowserError;

    fn hello_world() -> Repository {
        Repository {
            name: "Hello-World".to_string(),
            description: None,
            star_count: 5,
            topics: vec![],
            url: "https://github.com/octocat/Hello-World".to_string(),
        }
    }

    #[test]
    fn test_card_fallbacks() {
        let card = render_card(&hello_world());
        assert!(card.contains("Hello-World"));
        assert!(card.contains("No description available."));
        assert!(card.contains("Stars: 5"));
        assert!(card.contains("No topics available."));
        assert!(card.contains("https://github.com/octocat/Hello-World"));
    }

    #[test]
    fn test_blank_description_uses_fallback() {
        let mut repo = hello_world();
        repo.description = Some("   ".to_string());
        assert!(render_card(&repo).contains(NO_DESCRIPTION));
    }

    #[test]
    fn test_blank_topic_uses_fallback() {
        let mut repo = hello_world();
        repo.topics = vec![String::new()];
        assert!(render_card(&repo).contains("Topics: No topics available."));
    }

    #[test]
    fn test_card_with_description_and_topics() {
        let mut repo = hello_world();
        repo.description = Some("My first repository".to_string());
        repo.topics = vec!["rust".to_string(), "cli".to_string()];

        let card = render_card(&repo);
        assert!(card.contains("My first repository"));
        assert!(card.contains("Topics: rust, cli"));
        assert!(!card.contains(NO_DESCRIPTION));
        assert!(!card.contains(NO_TOPICS));
    }

    #[test]
    fn test_octocat_single_page() {
        let state = SearchState::with_results("octocat".into(), vec![hello_world()], 10);
        let text = render_text(&ViewState::rendered(&state));

        assert!(text.contains("Stars: 5"));
        assert!(text.contains("[Previous (disabled)] [*1*] [Next (disabled)]"));
        assert!(text.ends_with("Page 1 of 1\n"));
    }

    #[test]
    fn test_controls_across_pages() {
        let mut state = SearchState::with_results("octocat".into(), sample_repositories(25), 10);

        let first = render_controls(ViewState::rendered(&state).pagination.as_ref().unwrap());
        assert_eq!(first, "[Previous (disabled)] [*1*] [2] [3] [Next]");

        state.go_to_page(2);
        let second = render_controls(ViewState::rendered(&state).pagination.as_ref().unwrap());
        assert_eq!(second, "[Previous] [1] [*2*] [3] [Next]");

        state.go_to_page(3);
        let third = render_controls(ViewState::rendered(&state).pagination.as_ref().unwrap());
        assert_eq!(third, "[Previous] [1] [2] [*3*] [Next (disabled)]");
    }

    #[test]
    fn test_error_view_renders_only_message() {
        let view = ViewState::errored(Some("ghost"), &BrowserError::Fetch { status: 404 });
        assert_eq!(render_text(&view), "Error fetching repositories. Please try again.\n");
    }

    #[test]
    fn test_empty_view_has_no_controls() {
        let text = render_text(&ViewState::empty("octocat"));
        assert_eq!(text, "No repositories found.\n");
        assert!(!text.contains("Previous"));
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert_eq!(render_text(&ViewState::idle()), "");
    }

    #[test]
    fn test_text_sink_writes_rendered_text() {
        let mut sink = TextSink::new(Vec::new());
        sink.render(&ViewState::loading("octocat")).unwrap();
        sink.notice("hint").unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "Loading...\nhint\n");
    }

    #[test]
    fn test_json_sink_writes_snapshot() {
        let state = SearchState::with_results("octocat".into(), vec![hello_world()], 10);
        let mut sink = JsonSink::new(Vec::new());
        sink.render(&ViewState::rendered(&state)).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(value["status"], "rendered");
        assert_eq!(value["cards"][0]["name"], "Hello-World");
        assert_eq!(value["cards"][0]["star_count"], 5);
        assert_eq!(value["pagination"]["total_pages"], 1);
        assert_eq!(value["pagination"]["next_enabled"], false);
    }
}
