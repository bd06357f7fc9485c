//! Custom assertions for code extraction testing.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use smscode::{extract_code, CodeExtractor, ExtractorConfig};

/// Asserts that `keyword` extracts exactly `expected` from `text`.
///
/// # Panics
/// Panics if a different code, or no code, is extracted.
pub fn assert_extracts(text: &str, keyword: &str, expected: &str) {
    let actual = extract_code(text, keyword);
    assert_eq!(
        actual, expected,
        "Expected code '{}' from message '{}' with keyword '{}', got '{}'",
        expected, text, keyword, actual
    );
}

/// Asserts that no code is extracted from `text`.
///
/// # Panics
/// Panics if any code is extracted.
pub fn assert_no_code(text: &str, keyword: &str) {
    let actual = extract_code(text, keyword);
    assert!(
        actual.is_empty(),
        "Expected no code from message '{}' with keyword '{}', got '{}'",
        text,
        keyword,
        actual
    );
}

/// Extracts with a custom configuration, panicking on invalid setup.
pub fn extract_with(text: &str, keyword: &str, config: ExtractorConfig) -> Option<String> {
    CodeExtractor::with_config(keyword, config)
        .unwrap_or_else(|e| panic!("Invalid extractor setup for '{}': {}", keyword, e))
        .extract(text)
}
