//! Keyword pattern location.
//!
//! The keyword is the phrase that announces a code ("验证码", "OTP", ...).
//! It is always supplied by the caller as a regular expression.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::CharOffsets;
use crate::error::{SmsCodeError, SmsCodeResult};

/// A compiled, caller-supplied keyword pattern.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Regex,
}

/// The leftmost keyword match within a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// The literal text the pattern matched
    pub text: String,

    /// Character offset of the match
    pub offset: usize,
}

impl KeywordPattern {
    /// Compiles a keyword pattern.
    pub fn new(pattern: &str) -> SmsCodeResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| SmsCodeError::InvalidKeywordPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Builds a pattern matching `keyword` literally.
    pub fn literal(keyword: &str) -> SmsCodeResult<Self> {
        Self::new(&regex::escape(keyword))
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Finds the leftmost keyword match in `text`.
    ///
    /// An empty match counts as no match: a pattern such as `a*` matching
    /// nothing cannot anchor a proximity window.
    pub fn locate(&self, text: &str) -> Option<KeywordMatch> {
        self.regex
            .find(text)
            .filter(|m| !m.as_str().is_empty())
            .map(|m| KeywordMatch {
                text: m.as_str().to_string(),
                offset: CharOffsets::of_byte(text, m.start()),
            })
    }

    /// Returns true if `text` contains the keyword.
    pub fn is_match(&self, text: &str) -> bool {
        self.locate(text).is_some()
    }
}

impl FromStr for KeywordPattern {
    type Err = SmsCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for KeywordPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
