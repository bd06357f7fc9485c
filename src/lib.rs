//! Verification code extraction from short-message text.
//!
//! Given a message and a caller-supplied keyword pattern (the phrase that
//! announces a code, such as "验证码" or "OTP"), this library finds the
//! one-time password the message carries. It uses no dictionary, model,
//! or network call: only positional patterns over digit and letter runs,
//! a proximity window around the keyword, and a confidence ranking.
//!
//! # Features
//!
//! - **Two script families**: ideographic messages, where tokens run
//!   together, and Latin/digit messages delimited by word boundaries
//! - **Whitespace tolerance**: codes split by injected spaces are rejoined
//! - **Fail-open filtering**: a code far from the keyword is still found
//!   when nothing closer exists
//! - **Pure and stateless**: safe to call from any number of threads
//!
//! # Architecture
//!
//! - [`domain`]: Pipeline stages (keyword, script, scanner, proximity, rank)
//! - [`extraction`]: Extraction service, configuration and delivery
//! - [`error`]: Error handling
//!
//! # Quick Start
//!
//! ```
//! use smscode::extract_code;
//!
//! let text = "【微信支付】754207(微信验证码，请勿泄露)，您于2024-09-02 11:57:21发起交易7700.00元";
//! assert_eq!(extract_code(text, "验证码"), "754207");
//! ```
//!
//! # Examples
//!
//! ## Reusing a compiled extractor
//!
//! ```
//! use smscode::{CodeExtractor, ExtractorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::new().with_proximity_radius(20);
//! let extractor = CodeExtractor::with_config(r"(?i)\botp\b", config)?;
//!
//! let code = extractor.extract("Your OTP is 4821, valid for 5 minutes");
//! assert_eq!(code.as_deref(), Some("4821"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting a pipeline stage
//!
//! ```
//! use smscode::domain::{ConfidenceTier, Script};
//!
//! assert_eq!(Script::classify("验证码 1234"), Script::Ideographic);
//! assert_eq!(ConfidenceTier::of("123456"), ConfidenceTier::SixDigitNumeric);
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod extraction;

// Re-exports for convenient access
pub use domain::{
    ConfidenceTier, KeywordPattern, Script, DEFAULT_PROXIMITY_RADIUS, MAX_CODE_LEN, MIN_CODE_LEN,
};
pub use error::{SmsCodeError, SmsCodeResult};
pub use extraction::{
    deliver, extract_code, CodeExtractor, CodeSink, ConsoleNotifier, DeliveryOutcome,
    ExtractionReport, ExtractorConfig, FileSink, Notification, NotificationConfig, Notifier,
    StdoutSink,
};
