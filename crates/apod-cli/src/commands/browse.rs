//! Interactive date picker.
//!
//! Selections are issued from the prompt loop without waiting; a background
//! task prints every snapshot the resolver publishes, so a slow date never
//! holds up the next selection.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use apod_application::ChannelObserver;
use apod_core::record::DateKey;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::AppContext;
use crate::render;

const INFO_COMMAND: &str = ":info";
const QUIT_COMMAND: &str = ":quit";

/// Completion and hints for the `:` commands.
#[derive(Clone)]
struct BrowseHelper {
    commands: Vec<&'static str>,
}

impl BrowseHelper {
    fn new() -> Self {
        Self {
            commands: vec![INFO_COMMAND, QUIT_COMMAND],
        }
    }
}

impl Helper for BrowseHelper {}

impl Completer for BrowseHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with(':') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for BrowseHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with(':') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for BrowseHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with(':') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for BrowseHelper {}

pub async fn run(context: &AppContext, detail: bool) -> Result<()> {
    let (observer, mut snapshots) = ChannelObserver::channel();
    let resolver = context.resolver(Arc::new(observer))?;
    let detail = Arc::new(AtomicBool::new(detail));

    let renderer_detail = Arc::clone(&detail);
    let renderer = tokio::spawn(async move {
        while let Some(snapshot) = snapshots.recv().await {
            let detail = renderer_detail.load(Ordering::Relaxed);
            println!("{}", render::snapshot(&snapshot, detail));
            if snapshot.state.is_settled() {
                println!();
            }
        }
    });

    let mut rl = Editor::new()?;
    rl.set_helper(Some(BrowseHelper::new()));

    println!("{}", "=== APOD ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "Enter a date (YYYY-MM-DD), an empty line to clear, '{INFO_COMMAND}' to toggle details, '{QUIT_COMMAND}' to exit."
        )
        .bright_black()
    );
    println!();

    loop {
        match rl.readline("date> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == QUIT_COMMAND {
                    break;
                }

                if trimmed == INFO_COMMAND {
                    let open = !detail.fetch_xor(true, Ordering::Relaxed);
                    tracing::debug!(open, "Toggled detail panel");
                    println!("{}", render::snapshot(&resolver.snapshot(), open));
                    println!();
                    continue;
                }

                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }

                match DateKey::parse_input(trimmed, DateKey::today()) {
                    // Progress arrives through the renderer
                    Ok(selection) => drop(resolver.select_date(selection)),
                    Err(e) => eprintln!("{}", e.to_string().red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", format!("CTRL-C detected. Type '{QUIT_COMMAND}' to exit.").yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // In-flight tasks still hold the sender
    renderer.abort();
    Ok(())
}
