//! Candidate code scanning.
//!
//! A scanner describes the token shape of a plausible code. Candidates
//! must not touch another character of their own class on either side,
//! so a nine-digit run never yields an eight-digit code from its edge.
//! The `regex` crate has no look-around; both scanners match maximal
//! runs of their class and keep those whose length is in bounds, which
//! accepts exactly the spans a bounded look-around pattern would.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::keyword::{KeywordMatch, KeywordPattern};
use super::script::Script;
use super::CharOffsets;

/// A plausible code found in a scanned text variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The matched token
    pub text: String,

    /// Character offset of the token's first occurrence in the scanned text
    pub offset: usize,
}

/// Which form of the message a scan ran over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanVariant {
    /// The message as supplied
    Original,

    /// The message with every whitespace character removed
    Stripped,
}

impl ScanVariant {
    /// Produces this variant of `text`.
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Original => Cow::Borrowed(text),
            Self::Stripped => Cow::Owned(strip_whitespace(text)),
        }
    }
}

/// The text variant that produced candidates, together with them and the
/// keyword as it appears in that variant.
///
/// Offsets downstream are only meaningful against `text`, so all three
/// always travel as one unit.
#[derive(Debug, Clone)]
pub struct ScanPass<'a> {
    pub variant: ScanVariant,
    pub text: Cow<'a, str>,
    pub candidates: Vec<Candidate>,

    /// Keyword within `text`; `None` until [`ScanPass::locate_keyword`]
    /// runs, or if the keyword cannot be found in this variant
    pub keyword: Option<KeywordMatch>,
}

impl ScanPass<'_> {
    /// Locates the keyword in this pass's text.
    ///
    /// The pattern is run again on the variant first. Patterns that stop
    /// matching once whitespace is gone (`\botp\b` in `yourOTP:`) fall
    /// back to the text matched in the original message, stripped the
    /// same way the variant was, searched literally.
    pub fn locate_keyword(&mut self, pattern: &KeywordPattern, original: &KeywordMatch) {
        self.keyword = pattern.locate(&self.text).or_else(|| {
            let literal = self.variant.apply(&original.text).into_owned();
            if literal.is_empty() {
                return None;
            }
            CharOffsets::find(&self.text, &literal).map(|offset| KeywordMatch {
                text: literal,
                offset,
            })
        });
    }
}

/// Trait for code token scanners.
pub trait CodeScanner: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Pattern matching maximal runs of the token class.
    fn pattern(&self) -> &Regex;

    /// Collects every in-bounds run, left to right, duplicates kept.
    fn scan(&self, text: &str, lengths: &RangeInclusive<usize>) -> Vec<Candidate> {
        self.pattern()
            .find_iter(text)
            .filter(|m| lengths.contains(&m.as_str().len()))
            .map(|m| Candidate {
                text: m.as_str().to_string(),
                offset: CharOffsets::find(text, m.as_str())
                    .unwrap_or_else(|| CharOffsets::of_byte(text, m.start())),
            })
            .collect()
    }
}

/// Letters and digits mixed, for ideographic messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericRunScanner;

impl CodeScanner for AlphanumericRunScanner {
    fn name(&self) -> &'static str {
        "alphanumeric-run"
    }

    fn pattern(&self) -> &Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").expect("Valid alphanumeric regex"));
        &PATTERN
    }
}

/// Digits only, for everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitRunScanner;

impl CodeScanner for DigitRunScanner {
    fn name(&self) -> &'static str {
        "digit-run"
    }

    fn pattern(&self) -> &Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"[0-9]+").expect("Valid digit regex"));
        &PATTERN
    }
}

/// Removes every whitespace character.
///
/// Besides Unicode `White_Space`, the information separators U+001C to
/// U+001F count as whitespace, as they do for `str.isspace`-style
/// classifiers that some gateways use when wrapping messages.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !is_space(*c)).collect()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Scans the variants of `text` in the script's order and returns the
/// first pass that finds anything.
pub fn scan_text<'a>(
    text: &'a str,
    script: Script,
    lengths: &RangeInclusive<usize>,
) -> Option<ScanPass<'a>> {
    let scanner = script.scanner();
    for variant in script.scan_order() {
        let variant_text = variant.apply(text);
        let candidates = scanner.scan(&variant_text, lengths);
        trace!(
            scanner = scanner.name(),
            ?variant,
            found = candidates.len(),
            "scanned text variant"
        );
        if !candidates.is_empty() {
            return Some(ScanPass {
                variant,
                text: variant_text,
                candidates,
                keyword: None,
            });
        }
    }
    None
}
