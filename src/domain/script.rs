//! Script classification.
//!
//! A coarse binary switch: any ideograph (or the ideographic full stop)
//! makes the whole message ideographic. It only decides which scanner and
//! which scan order apply.

use once_cell::sync::Lazy;
use regex::Regex;

use super::scanner::{AlphanumericRunScanner, CodeScanner, DigitRunScanner, ScanVariant};

/// The script family of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Contains CJK ideographs; tokens may run together
    Ideographic,

    /// Everything else; codes are delimited by non-digits
    Other,
}

static SCANNER_IDEOGRAPHIC: AlphanumericRunScanner = AlphanumericRunScanner;
static SCANNER_OTHER: DigitRunScanner = DigitRunScanner;

impl Script {
    /// Classifies `text`.
    pub fn classify(text: &str) -> Self {
        if Self::ideograph_pattern().is_match(text) {
            Self::Ideographic
        } else {
            Self::Other
        }
    }

    pub fn is_ideographic(self) -> bool {
        self == Self::Ideographic
    }

    /// Scanner describing plausible code tokens for this script.
    pub fn scanner(self) -> &'static dyn CodeScanner {
        match self {
            Self::Ideographic => &SCANNER_IDEOGRAPHIC,
            Self::Other => &SCANNER_OTHER,
        }
    }

    /// Text variants to scan, in order, until one yields candidates.
    ///
    /// Ideographic messages often carry codes broken by injected spaces, so
    /// the stripped variant goes first there.
    pub fn scan_order(self) -> [ScanVariant; 2] {
        match self {
            Self::Ideographic => [ScanVariant::Stripped, ScanVariant::Original],
            Self::Other => [ScanVariant::Original, ScanVariant::Stripped],
        }
    }

    fn ideograph_pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"[\x{4E00}-\x{9FA5}\x{3002}]").expect("Valid ideograph regex")
        });
        &PATTERN
    }
}

/// Returns true if `text` contains a common CJK ideograph or `。`.
pub fn is_ideographic_script(text: &str) -> bool {
    Script::classify(text).is_ideographic()
}
