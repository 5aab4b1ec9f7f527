use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn lector() -> Command {
    cargo_bin_cmd!("lector")
}

/// Write the shared corpus fixture: three posts, one with "javascript" in
/// the title and tags, one with it only in body content, one unrelated
/// with a bare (non-RFC 3339) date string.
#[allow(dead_code)]
pub fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("corpus.json");
    let corpus = r#"[
  {
    "id": "learning-javascript",
    "title": "Learning JavaScript",
    "content": "Closures, prototypes, and the event loop.",
    "tags": ["javascript", "webdev"],
    "categories": ["programming"],
    "summary": "A gentle introduction to the language",
    "url": "/posts/learning-javascript/",
    "date": "2024-05-01T00:00:00Z",
    "type": "post"
  },
  {
    "id": "rust-notes",
    "title": "Rust Notes",
    "content": "Borrow checker diary with a javascript comparison.",
    "tags": ["rust"],
    "categories": ["programming"],
    "summary": "Field notes from learning Rust",
    "url": "/posts/rust-notes/",
    "date": "2024-06-10T00:00:00Z",
    "type": "post"
  },
  {
    "id": "weekend-walks",
    "title": "Weekend Walks",
    "content": "Photos from the coast path.",
    "tags": [],
    "categories": ["life"],
    "summary": "Salt air and sore feet",
    "url": "/posts/weekend-walks/",
    "date": "2024-07-20",
    "type": "post"
  }
]"#;
    fs::write(&path, corpus).expect("write corpus fixture");
    path
}

/// Write a scroll trace fixture as JSON lines
#[allow(dead_code)]
pub fn write_trace(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("trace.jsonl");
    fs::write(&path, lines.join("\n")).expect("write trace fixture");
    path
}
