//! Splitting a raw corpus into page records.
//!
//! A record starts at a line of the form `*PAGE:<url>` and runs until the next marker or the
//! end of input. The line right after the marker is the title and every later line is a
//! content term, kept verbatim.

use crate::Document;

pub const PAGE_MARKER: &str = "*PAGE:";

/// Returns the documents of every valid record, in corpus order. Invalid records are dropped.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Document> {
    let markers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.as_ref().starts_with(PAGE_MARKER))
        .map(|(i, _)| i)
        .collect();

    let mut docs = Vec::with_capacity(markers.len());
    for (n, &start) in markers.iter().enumerate() {
        let end = markers.get(n + 1).copied().unwrap_or(lines.len());
        match build_record(lines, start, end) {
            Some(doc) => docs.push(doc),
            None => tracing::debug!(line = start, "dropping page record without title and words"),
        }
    }
    docs
}

/// A record is valid when, after the marker, there is a non-blank title line followed by at
/// least one more non-blank line before `end`.
fn is_valid_record<S: AsRef<str>>(lines: &[S], start: usize, end: usize) -> bool {
    let mut non_blank = lines[start + 1..end].iter().filter(|l| !l.as_ref().trim().is_empty());
    non_blank.next().is_some() && non_blank.next().is_some()
}

fn build_record<S: AsRef<str>>(lines: &[S], start: usize, end: usize) -> Option<Document> {
    if !is_valid_record(lines, start, end) {
        return None;
    }
    let url = lines[start].as_ref().strip_prefix(PAGE_MARKER)?;
    let title = lines[start + 1].as_ref();
    let content = lines[start + 2..end].iter().map(|l| l.as_ref().to_string()).collect();
    Some(Document::new(url, title, content))
}
