//! Extractor configuration.

use std::ops::RangeInclusive;

use crate::domain::{DEFAULT_PROXIMITY_RADIUS, MAX_CODE_LEN, MIN_CODE_LEN};
use crate::error::{SmsCodeError, SmsCodeResult};

/// Tunable constants of the extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Characters around a candidate searched for the keyword
    pub proximity_radius: usize,

    /// Shortest accepted code
    pub min_code_len: usize,

    /// Longest accepted code
    pub max_code_len: usize,
}

impl ExtractorConfig {
    /// Creates a configuration with the default constants.
    pub fn new() -> Self {
        Self {
            proximity_radius: DEFAULT_PROXIMITY_RADIUS,
            min_code_len: MIN_CODE_LEN,
            max_code_len: MAX_CODE_LEN,
        }
    }

    /// Sets the proximity radius.
    pub fn with_proximity_radius(mut self, radius: usize) -> Self {
        self.proximity_radius = radius;
        self
    }

    /// Sets the accepted code length bounds (inclusive).
    pub fn with_code_lengths(mut self, min: usize, max: usize) -> Self {
        self.min_code_len = min;
        self.max_code_len = max;
        self
    }

    /// Accepted code lengths as a range.
    pub fn code_lengths(&self) -> RangeInclusive<usize> {
        self.min_code_len..=self.max_code_len
    }

    /// Checks the bounds are usable.
    pub fn validate(&self) -> SmsCodeResult<()> {
        if self.min_code_len == 0 {
            return Err(SmsCodeError::invalid_config(
                "min_code_len",
                "must be at least 1",
            ));
        }
        if self.min_code_len > self.max_code_len {
            return Err(SmsCodeError::invalid_config(
                "max_code_len",
                format!(
                    "must not be less than min_code_len ({} > {})",
                    self.min_code_len, self.max_code_len
                ),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}
