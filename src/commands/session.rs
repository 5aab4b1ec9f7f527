//! Scripted search session driven by stdin
//!
//! One command per line, one state line per command:
//! - `type <text>`  — search input changed (goes through the debouncer)
//! - `tick [<ms>]`  — advance the virtual clock and flush due queries
//! - `key down|up|enter|esc` — keyboard navigation
//!
//! The virtual clock makes debounce behavior reproducible in tests.

use std::io::{self, BufRead};

use crate::cli::{Cli, OutputFormat, SessionArgs};
use lector_core::debounce::DEBOUNCE_MS;
use lector_core::error::Result;
use lector_core::event::{Key, PageEvent};
use lector_core::page::{PageUpdate, ReaderPage};

pub fn run(cli: &Cli, args: &SessionArgs) -> Result<()> {
    let corpus = super::load_corpus(&args.corpus)?;
    // Word count 0: this host only exercises the search side.
    let mut page = ReaderPage::new(0, 0.0, corpus);
    let mut now_ms = 0.0;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let state = step(&mut page, &mut now_ms, line);
        match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({ "input": line, "state": state, "now_ms": now_ms })
                );
            }
            OutputFormat::Human => println!("{}", state),
        }
    }

    Ok(())
}

fn step(page: &mut ReaderPage, now_ms: &mut f64, line: &str) -> String {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("type") => {
            // Strip the command word and the whole whitespace run after it,
            // so `type  rust` submits "rust", not " rust".
            let text = line
                .strip_prefix("type")
                .map(str::trim_start)
                .unwrap_or("")
                .to_string();
            page.handle(PageEvent::Input {
                time_ms: *now_ms,
                text,
            });
            "queued".to_string()
        }
        Some("tick") => {
            let delta: f64 = parts
                .next()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEBOUNCE_MS);
            *now_ms += delta;
            match page.tick(*now_ms) {
                Some(count) => format!("results {} for {:?}", count, page.search().query()),
                None => "idle".to_string(),
            }
        }
        Some("key") => {
            let key = match parts.next() {
                Some("down") => Key::ArrowDown,
                Some("up") => Key::ArrowUp,
                Some("enter") => Key::Enter,
                Some("esc") => Key::Escape,
                other => return format!("unknown key {:?}", other.unwrap_or("")),
            };
            match page.handle(PageEvent::Key(key)) {
                PageUpdate::Selection(index) => format!("selected {}", index),
                PageUpdate::Navigate(url) => format!("navigate {}", url),
                PageUpdate::Dismissed => "dismissed".to_string(),
                _ => "ignored".to_string(),
            }
        }
        _ => "unknown command".to_string(),
    }
}
