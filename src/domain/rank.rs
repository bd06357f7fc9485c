//! Confidence ranking of candidates.
//!
//! Candidates are ordered first by how closely their shape matches common
//! code formats, then by distance from the keyword.

use once_cell::sync::Lazy;
use regex::Regex;

use super::scanner::Candidate;
use super::CharOffsets;

/// How closely a candidate's shape matches real-world code formats.
///
/// Variants are declared lowest first so the derived ordering is the
/// ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceTier {
    None,
    GenericText,
    AlphabeticOnly,
    OtherLengthNumeric,
    FourDigitNumeric,
    SixDigitNumeric,
}

impl ConfidenceTier {
    /// Classifies a candidate by its text alone.
    pub fn of(code: &str) -> Self {
        if code.is_empty() {
            Self::None
        } else if Self::six_digits().is_match(code) {
            Self::SixDigitNumeric
        } else if Self::four_digits().is_match(code) {
            Self::FourDigitNumeric
        } else if Self::digits().is_match(code) {
            Self::OtherLengthNumeric
        } else if Self::letters().is_match(code) {
            Self::AlphabeticOnly
        } else {
            Self::GenericText
        }
    }

    // Pattern helper methods (cached via Lazy)

    fn six_digits() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("Valid regex"));
        &PATTERN
    }

    fn four_digits() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("Valid regex"));
        &PATTERN
    }

    fn digits() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Valid regex"));
        &PATTERN
    }

    fn letters() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("Valid regex"));
        &PATTERN
    }
}

/// The winning candidate with the facts that made it win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCode<'c> {
    pub candidate: &'c Candidate,
    pub tier: ConfidenceTier,
    pub distance: usize,
}

/// Character distance between the first occurrences of `keyword` and
/// `code` in `text`, or `usize::MAX` if either is absent.
///
/// Only first occurrences count. A repeated code whose later copy sits
/// next to the keyword is measured from its earlier copy.
pub fn distance_to_keyword(keyword: &str, code: &str, text: &str) -> usize {
    match (CharOffsets::find(text, keyword), CharOffsets::find(text, code)) {
        (Some(k), Some(c)) => k.abs_diff(c),
        _ => usize::MAX,
    }
}

/// Picks the highest-tier candidate, nearest to the keyword within that
/// tier. Earlier candidates win exact ties.
///
/// With no keyword every distance is `usize::MAX` and the first candidate
/// of the best tier wins.
pub fn rank<'c, I>(candidates: I, keyword: Option<&str>, text: &str) -> Option<RankedCode<'c>>
where
    I: IntoIterator<Item = &'c Candidate>,
{
    let mut best: Option<RankedCode<'c>> = None;
    for candidate in candidates {
        let tier = ConfidenceTier::of(&candidate.text);
        let distance = keyword.map_or(usize::MAX, |k| {
            distance_to_keyword(k, &candidate.text, text)
        });

        let better = match &best {
            None => true,
            Some(current) => {
                tier > current.tier || (tier == current.tier && distance < current.distance)
            }
        };
        if better {
            best = Some(RankedCode {
                candidate,
                tier,
                distance,
            });
        }
    }
    best
}
