//! Replay a scroll trace through a reading session
//!
//! The trace is JSON lines. A record with a `hidden` field is a visibility
//! change; anything else is a scroll event:
//!
//! ```json
//! {"time_ms": 1000, "scroll_top": 250, "viewport_height": 800, "document_height": 1800}
//! {"time_ms": 2000, "hidden": true}
//! ```

use std::fs;

use serde::Deserialize;

use crate::cli::{Cli, OutputFormat, ReadingArgs};
use lector_core::error::{LectorError, Result};
use lector_core::progress::{AnalyticsSink, LogSink, ReadingSession};

#[derive(Debug, Deserialize)]
struct TraceRecord {
    time_ms: f64,
    #[serde(default)]
    scroll_top: f64,
    #[serde(default)]
    viewport_height: f64,
    #[serde(default)]
    document_height: f64,
    #[serde(default)]
    hidden: Option<bool>,
}

pub fn run(cli: &Cli, args: &ReadingArgs) -> Result<()> {
    if !args.trace.exists() {
        return Err(LectorError::invalid_trace(&args.trace, "no such file"));
    }
    let raw = fs::read_to_string(&args.trace)
        .map_err(|e| LectorError::invalid_trace(&args.trace, e))?;

    let mut session = ReadingSession::new(args.words, 0.0);
    if let Some(wpm) = args.wpm {
        session = session.with_words_per_minute(wpm);
    }
    let mut sink = LogSink;

    for (lineno, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: TraceRecord = serde_json::from_str(line).map_err(|e| {
            LectorError::invalid_trace(&args.trace, format!("line {}: {}", lineno + 1, e))
        })?;

        if let Some(hidden) = record.hidden {
            if hidden {
                session.pause(record.time_ms);
            } else {
                session.resume(record.time_ms);
            }
            continue;
        }

        let view = session.on_scroll(
            record.time_ms,
            record.scroll_top,
            record.viewport_height,
            record.document_height,
        );
        for milestone in &view.milestones {
            sink.record(milestone);
        }

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&view)?),
            OutputFormat::Human => {
                if !cli.quiet {
                    println!("{:.1}% {}", view.percent, view.label);
                }
                for m in &view.milestones {
                    println!(
                        "milestone {} elapsed_ms={:.0} words_read={}",
                        m.milestone, m.elapsed_ms, m.words_read
                    );
                }
            }
        }
    }

    Ok(())
}
