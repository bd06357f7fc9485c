//! Extraction service and its collaborators.
//!
//! [`CodeExtractor`] runs the pipeline from the [`crate::domain`] stages.
//! The [`delivery`] module hands its result to sinks and notifiers.

pub mod config;
pub mod delivery;

pub use config::ExtractorConfig;
pub use delivery::{
    deliver, CodeSink, ConsoleNotifier, DeliveryOutcome, FileSink, Notification,
    NotificationConfig, Notifier, Presentation, StdoutSink,
};

use tracing::{debug, warn};

use crate::domain::{
    filter_near, rank, scan_text, ConfidenceTier, KeywordMatch, KeywordPattern, ScanVariant,
    Script,
};
use crate::error::SmsCodeResult;

/// Outcome of one extraction with the facts behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// The chosen code, if any
    pub code: Option<String>,

    /// Script the message was classified as
    pub script: Script,

    /// Keyword match in the original message
    pub keyword: Option<KeywordMatch>,

    /// Text variant that produced candidates
    pub variant: Option<ScanVariant>,

    /// Tier of the chosen code
    pub tier: ConfidenceTier,

    /// Candidates found by the scanner
    pub candidates_found: usize,

    /// Candidates within the proximity window of the keyword
    pub candidates_near: usize,
}

impl ExtractionReport {
    fn empty(script: Script, keyword: Option<KeywordMatch>) -> Self {
        Self {
            code: None,
            script,
            keyword,
            variant: None,
            tier: ConfidenceTier::None,
            candidates_found: 0,
            candidates_near: 0,
        }
    }

    /// Returns true if a code was chosen.
    pub fn is_found(&self) -> bool {
        self.code.is_some()
    }

    /// The chosen code, or `""`.
    pub fn code_str(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }
}

/// Stateless verification code extractor.
///
/// Holds only the compiled keyword pattern and configuration, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct CodeExtractor {
    keyword: KeywordPattern,
    config: ExtractorConfig,
}

impl CodeExtractor {
    /// Creates an extractor with the default configuration.
    pub fn new(keyword_pattern: &str) -> SmsCodeResult<Self> {
        Self::with_config(keyword_pattern, ExtractorConfig::default())
    }

    /// Creates an extractor with a custom configuration.
    pub fn with_config(keyword_pattern: &str, config: ExtractorConfig) -> SmsCodeResult<Self> {
        config.validate()?;
        Ok(Self {
            keyword: KeywordPattern::new(keyword_pattern)?,
            config,
        })
    }

    pub fn keyword(&self) -> &KeywordPattern {
        &self.keyword
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts the most likely verification code from `text`.
    pub fn extract(&self, text: &str) -> Option<String> {
        self.analyze(text).code
    }

    /// Runs the pipeline and reports how the result was reached.
    ///
    /// 1. No keyword in the message means no code.
    /// 2. The script picks a scanner and the order of text variants.
    /// 3. The keyword is located again in the variant that produced
    ///    candidates so offsets agree with it, falling back to the text
    ///    it matched in the original message.
    /// 4. Candidates near the keyword are kept, or all if none are near.
    /// 5. The best tier wins, then the nearest, then the earliest.
    pub fn analyze(&self, text: &str) -> ExtractionReport {
        let script = Script::classify(text);

        let Some(keyword) = self.keyword.locate(text) else {
            debug!(pattern = %self.keyword, "keyword not found");
            return ExtractionReport::empty(script, None);
        };

        let Some(mut pass) = scan_text(text, script, &self.config.code_lengths()) else {
            debug!(?script, "no candidate codes found");
            return ExtractionReport::empty(script, Some(keyword));
        };

        pass.locate_keyword(&self.keyword, &keyword);
        let keyword_text = pass.keyword.as_ref().map(|k| k.text.as_str());
        if keyword_text.is_none() {
            warn!(
                variant = ?pass.variant,
                "keyword not present in scanned variant; ranking without proximity"
            );
        }

        let near = match keyword_text {
            Some(kw) => filter_near(&pass.candidates, kw, &pass.text, self.config.proximity_radius),
            None => pass.candidates.iter().collect(),
        };
        let best = rank(near.iter().copied(), keyword_text, &pass.text);

        debug!(
            ?script,
            variant = ?pass.variant,
            found = pass.candidates.len(),
            near = near.len(),
            code = best.map(|b| b.candidate.text.as_str()),
            "extraction finished"
        );

        ExtractionReport {
            code: best.map(|b| b.candidate.text.clone()),
            script,
            keyword: Some(keyword),
            variant: Some(pass.variant),
            tier: best.map_or(ConfidenceTier::None, |b| b.tier),
            candidates_found: pass.candidates.len(),
            candidates_near: near.len(),
        }
    }
}

/// Extracts a verification code, returning `""` when none is found.
///
/// An invalid keyword pattern also yields `""`; use [`CodeExtractor::new`]
/// to see the compilation error.
pub fn extract_code(text: &str, keyword_pattern: &str) -> String {
    match CodeExtractor::new(keyword_pattern) {
        Ok(extractor) => extractor.extract(text).unwrap_or_default(),
        Err(err) => {
            warn!(error = %err, "cannot extract code");
            String::new()
        }
    }
}
