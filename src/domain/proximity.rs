//! Proximity filtering of candidates against the keyword.

use super::scanner::Candidate;
use super::CharOffsets;

/// Returns true if `keyword` appears within `radius` characters of the
/// first occurrence of `code` in `text`.
///
/// The window runs from `radius` characters before the code to `radius`
/// characters after its end, clamped to the text.
pub fn is_near_keyword(keyword: &str, code: &str, text: &str, radius: usize) -> bool {
    match CharOffsets::find(text, code) {
        Some(offset) => window_contains(keyword, offset, CharOffsets::len(code), text, radius),
        None => false,
    }
}

/// Keeps candidates near the keyword.
///
/// Fails open: when nothing is near, every candidate is returned.
pub fn filter_near<'c>(
    candidates: &'c [Candidate],
    keyword: &str,
    text: &str,
    radius: usize,
) -> Vec<&'c Candidate> {
    let near: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| window_contains(keyword, c.offset, CharOffsets::len(&c.text), text, radius))
        .collect();

    if near.is_empty() {
        candidates.iter().collect()
    } else {
        near
    }
}

fn window_contains(keyword: &str, offset: usize, len: usize, text: &str, radius: usize) -> bool {
    let begin = offset.saturating_sub(radius);
    let end = offset.saturating_add(len).saturating_add(radius);
    CharOffsets::slice(text, begin, end).contains(keyword)
}
