//! Message fixtures and builders.
//!
//! Provides canned messages seen in the wild and a builder for composing
//! messages with the code placed at a known distance from the keyword.

/// WeChat Pay message: the code precedes the keyword, followed by a date,
/// a time and an amount that are all numeric runs of valid length.
pub const WECHAT_PAY: &str =
    "【微信支付】754207(微信验证码，请勿泄露)，您于2024-09-02 11:57:21发起交易7700.00元";

/// Plain Latin OTP message.
pub const LATIN_OTP: &str = "Your OTP is 4821, valid for 5 minutes";

/// Ideographic message with a code broken up by injected spaces.
pub const SPACED_CODE: &str = "【某银行】您的验证码为 7 5 4 2 0 7，5分钟内有效，请勿泄露。";

/// Ideographic message with an alphanumeric code.
pub const ALPHANUMERIC_CODE: &str = "【代码托管】验证码：Ab3dE9，用于登录，10分钟内有效。";

/// Builder for composing test messages.
///
/// # Example
///
/// ```ignore
/// let text = TestMessageBuilder::new()
///     .with_sender("Bank")
///     .with_text("OTP")
///     .with_padding(10)
///     .with_text("123456")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TestMessageBuilder {
    sender: Option<String>,
    parts: Vec<String>,
}

impl TestMessageBuilder {
    /// Creates an empty message builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes the message with a bracketed sender tag.
    pub fn with_sender(mut self, sender: &str) -> Self {
        self.sender = Some(sender.to_string());
        self
    }

    /// Appends literal text.
    pub fn with_text(mut self, text: &str) -> Self {
        self.parts.push(text.to_string());
        self
    }

    /// Appends `count` filler characters that never form a candidate.
    pub fn with_padding(mut self, count: usize) -> Self {
        self.parts.push("-".repeat(count));
        self
    }

    /// Appends `count` ideographic filler characters.
    pub fn with_ideographic_padding(mut self, count: usize) -> Self {
        self.parts.push("的".repeat(count));
        self
    }

    /// Builds the message text.
    pub fn build(self) -> String {
        let mut text = String::new();
        if let Some(sender) = &self.sender {
            text.push_str(&format!("【{}】", sender));
        }
        for part in &self.parts {
            text.push_str(part);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let text = TestMessageBuilder::new()
            .with_sender("Bank")
            .with_text("OTP")
            .with_padding(3)
            .with_text("4821")
            .build();
        assert_eq!(text, "【Bank】OTP---4821");
    }
}
