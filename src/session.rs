// src/session.rs
// =============================================================================
// The interactive `browse` session.
//
// Reads one command per line and turns it into a browser action:
//
//   search <username>   (alias: s)   fetch a user's repositories
//   size <n>                          change the page size
//   page <n>                          jump to page n
//   next / n, prev / p                step one page
//   show                              render the current view again
//   help / ?                          list commands
//   quit / q / exit                   leave (end of input works too)
//
// After every action the new view is rendered. A search renders twice:
// once with "Loading..." and once with the result.
// =============================================================================

use anyhow::Result;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::browser::RepositoryBrowser;
use crate::github::RepositorySource;
use crate::render::ViewSink;

pub const HELP_TEXT: &str = "Commands:
  search <username>   list a user's repositories (alias: s)
  size <n>            change repositories per page
  page <n>            jump to page n
  next | n            next page
  prev | p            previous page
  show                show the current page again
  help | ?            this list
  quit | q            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    PageSize(usize),
    Page(usize),
    Next,
    Previous,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
    #[error("'{0}' needs a number, e.g. '{0} 2'")]
    MissingNumber(&'static str),
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

impl Command {
    // Parses one input line. Blank lines give Ok(None).
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            // An empty username is passed through; the browser reports it
            "search" | "s" => Command::Search(rest.to_string()),
            "size" => Command::PageSize(parse_number("size", rest)?),
            "page" => Command::Page(parse_number("page", rest)?),
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_number(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingNumber(command));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

// Runs the session until `quit` or end of input
//
// `initial_username` mirrors the web page searching as soon as it loads.
pub async fn run_session<S, K, R>(
    browser: &mut RepositoryBrowser<S>,
    sink: &mut K,
    input: R,
    initial_username: Option<&str>,
) -> Result<()>
where
    S: RepositorySource,
    K: ViewSink + ?Sized,
    R: AsyncBufRead + Unpin,
{
    if let Some(username) = initial_username {
        run_search(browser, sink, username).await?;
    } else {
        sink.notice("Type 'search <username>' to begin, or 'help' for commands.")?;
    }

    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                sink.notice(&e.to_string())?;
                continue;
            }
        };

        debug!(?command, "session command");

        match command {
            Command::Search(username) => run_search(browser, sink, &username).await?,
            Command::PageSize(size) => match browser.set_page_size(size) {
                Ok(()) => sink.render(browser.view())?,
                Err(e) => sink.notice(e.user_message())?,
            },
            Command::Page(target) => navigate(browser, sink, |b| b.go_to_page(target))?,
            Command::Next => navigate(browser, sink, |b| b.next_page())?,
            Command::Previous => navigate(browser, sink, |b| b.previous_page())?,
            Command::Show => sink.render(browser.view())?,
            Command::Help => sink.notice(HELP_TEXT)?,
            Command::Quit => break,
        }
    }

    Ok(())
}

// Search with a visible Loading step in between
//
// Fetch and validation failures are already in the view, so they are
// rendered rather than returned.
async fn run_search<S, K>(browser: &mut RepositoryBrowser<S>, sink: &mut K, username: &str) -> Result<()>
where
    S: RepositorySource,
    K: ViewSink + ?Sized,
{
    let ticket = match browser.begin_search(username) {
        Ok(ticket) => ticket,
        Err(_) => return sink.render(browser.view()),
    };
    sink.render(browser.view())?;
    debug!(username = ticket.username(), "waiting for repository list");

    let outcome = browser.fetch(&ticket).await;
    let _ = browser.complete_search(ticket, outcome);

    sink.render(browser.view())
}

// Page moves that land nowhere leave the screen alone
fn navigate<S, K, F>(browser: &mut RepositoryBrowser<S>, sink: &mut K, action: F) -> Result<()>
where
    S: RepositorySource,
    K: ViewSink + ?Sized,
    F: FnOnce(&mut RepositoryBrowser<S>) -> bool,
{
    if action(browser) {
        sink.render(browser.view())
    } else {
        Ok(())
    }
}
