//! Domain logic for locating verification codes in message text.
//!
//! Each stage of the extraction pipeline lives in its own module:
//! keyword location, script classification, candidate scanning,
//! proximity filtering and ranking. All of them are pure functions of
//! their inputs.

pub mod keyword;
pub mod proximity;
pub mod rank;
pub mod scanner;
pub mod script;

pub use keyword::{KeywordMatch, KeywordPattern};
pub use proximity::{filter_near, is_near_keyword};
pub use rank::{distance_to_keyword, rank, ConfidenceTier, RankedCode};
pub use scanner::{
    scan_text, strip_whitespace, AlphanumericRunScanner, Candidate, CodeScanner,
    DigitRunScanner, ScanPass, ScanVariant,
};
pub use script::{is_ideographic_script, Script};

/// Characters on either side of a candidate searched for the keyword.
pub const DEFAULT_PROXIMITY_RADIUS: usize = 30;

/// Shortest run accepted as a code.
pub const MIN_CODE_LEN: usize = 4;

/// Longest run accepted as a code.
pub const MAX_CODE_LEN: usize = 8;

/// Character-offset arithmetic over UTF-8 text.
///
/// Offsets and windows throughout the pipeline count characters, not
/// bytes, so a radius means the same thing for ideographic and Latin
/// messages.
pub struct CharOffsets;

impl CharOffsets {
    /// Character offset of the first occurrence of `needle`.
    pub fn find(haystack: &str, needle: &str) -> Option<usize> {
        haystack
            .find(needle)
            .map(|byte| Self::of_byte(haystack, byte))
    }

    /// Converts a byte offset on a char boundary into a character offset.
    pub fn of_byte(text: &str, byte: usize) -> usize {
        text[..byte].chars().count()
    }

    /// Number of characters in `text`.
    pub fn len(text: &str) -> usize {
        text.chars().count()
    }

    /// Slices `text` by character offsets, clamping both ends to the text.
    pub fn slice(text: &str, start: usize, end: usize) -> &str {
        let to_byte = |chars: usize| {
            text.char_indices()
                .nth(chars)
                .map_or(text.len(), |(byte, _)| byte)
        };
        let start = to_byte(start);
        let end = to_byte(end).max(start);
        &text[start..end]
    }
}
