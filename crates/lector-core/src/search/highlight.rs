//! Display-only query term highlighting
//!
//! Marks case-insensitive substring matches of the raw query terms, wrapped
//! in `<mark>` tags. Independent of stemming: this decorates what the user
//! typed, not what the index matched, and never affects ranking.

/// Wrap each case-insensitive occurrence of the raw query's
/// whitespace-separated terms in `<mark>…</mark>`.
pub fn highlight(text: &str, raw_query: &str) -> String {
    let terms: Vec<String> = raw_query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    if terms.is_empty() || text.is_empty() {
        return text.to_string();
    }

    let lower = text.to_lowercase();
    // Case folding that changes byte length defeats offset mapping back
    // into the original text; skip marking rather than risk splitting a
    // character.
    if lower.len() != text.len() {
        return text.to_string();
    }

    let mut ranges = collect_match_ranges(&lower, &terms);
    if ranges.is_empty() {
        return text.to_string();
    }
    ranges.sort_unstable();
    let merged = merge_ranges(ranges);

    let mut out = String::with_capacity(text.len() + merged.len() * 13);
    let mut cursor = 0;
    for (start, end) in merged {
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push_str("<mark>");
        out.push_str(&text[start..end]);
        out.push_str("</mark>");
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

fn collect_match_ranges(lower: &str, terms: &[String]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    for term in terms {
        let mut offset = 0;
        while let Some(pos) = lower[offset..].find(term.as_str()) {
            let start = offset + pos;
            ranges.push((start, start + term.len()));
            offset = start + term.len();
        }
    }
    ranges
}

fn merge_ranges(sorted: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let mut merged: Vec<(usize, usize)> = Vec::new();
    for (start, end) in sorted {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }
    merged
}
