//! Verification code extraction CLI.
//!
//! Reads a short message from an argument, a file or standard input,
//! prints the verification code it carries and optionally writes it to a
//! file and shows a notification.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use smscode::{
    deliver, CodeExtractor, CodeSink, ConsoleNotifier, ExtractorConfig, FileSink,
    NotificationConfig, Notifier, StdoutSink, DEFAULT_PROXIMITY_RADIUS, MAX_CODE_LEN,
    MIN_CODE_LEN,
};

/// Default keyword: "verification code" in Chinese.
const DEFAULT_KEYWORD: &str = "验证码";

/// Verification code extractor
///
/// Extract a one-time password from SMS text using a keyword pattern.
/// Reads the message from MESSAGE, --input, or standard input.
#[derive(Parser)]
#[command(name = "smscode")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Message text (reads standard input when omitted)
    #[arg(value_name = "MESSAGE", conflicts_with = "input")]
    message: Option<String>,

    /// Keyword pattern (regular expression) announcing the code
    #[arg(short, long, value_name = "PATTERN", default_value = DEFAULT_KEYWORD)]
    keyword: String,

    /// Read the message from a file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Also write the code to a file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Characters around a candidate searched for the keyword
    #[arg(short, long, value_name = "CHARS", default_value_t = DEFAULT_PROXIMITY_RADIUS)]
    radius: usize,

    /// Shortest accepted code
    #[arg(long, value_name = "LEN", default_value_t = MIN_CODE_LEN)]
    min_len: usize,

    /// Longest accepted code
    #[arg(long, value_name = "LEN", default_value_t = MAX_CODE_LEN)]
    max_len: usize,

    /// Show a notification on standard error
    #[arg(long)]
    notify: bool,

    /// Seconds a notification stays visible
    #[arg(long, value_name = "SECS", default_value_t = 3, requires = "notify")]
    duration: u64,

    /// Present notifications synchronously
    #[arg(long, requires = "notify")]
    blocking: bool,

    /// Enable verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Extraction command handler with dependency injection.
struct ExtractionHandler {
    extractor: CodeExtractor,
    sinks: Vec<Box<dyn CodeSink>>,
    notifier: Option<Box<dyn Notifier>>,
    notification: NotificationConfig,
}

impl ExtractionHandler {
    fn new(cli: &Cli) -> Result<Self> {
        let config = ExtractorConfig::new()
            .with_proximity_radius(cli.radius)
            .with_code_lengths(cli.min_len, cli.max_len);
        let extractor = CodeExtractor::with_config(&cli.keyword, config)
            .context("Invalid extractor configuration")?;

        let mut sinks: Vec<Box<dyn CodeSink>> = vec![Box::new(StdoutSink)];
        if let Some(path) = &cli.output {
            sinks.push(Box::new(FileSink::new(path)));
        }

        let notifier: Option<Box<dyn Notifier>> = if cli.notify {
            Some(Box::new(ConsoleNotifier))
        } else {
            None
        };

        Ok(Self {
            extractor,
            sinks,
            notifier,
            notification: NotificationConfig {
                duration: Duration::from_secs(cli.duration),
                threaded: !cli.blocking,
            },
        })
    }

    /// Extracts the code from `message` and hands it to the sinks.
    fn run(&self, message: &str) -> Result<()> {
        let report = self.extractor.analyze(message);
        info!(
            script = ?report.script,
            variant = ?report.variant,
            tier = ?report.tier,
            found = report.candidates_found,
            near = report.candidates_near,
            "analyzed message"
        );

        let outcome = deliver(
            report.code.as_deref(),
            &self.sinks,
            self.notifier.as_deref(),
            self.notification,
        )
        .finish();

        if report.code.is_none() {
            anyhow::bail!("No verification code found in message");
        }

        if let Some(err) = outcome.failures.into_iter().next() {
            return Err(err).context("Failed to deliver verification code");
        }

        Ok(())
    }
}

/// Reads the message from the first available source.
fn read_message(message: Option<&str>, input: Option<&Path>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message.to_string());
    }

    if let Some(path) = input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read message from standard input")?;
    Ok(buffer)
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose))
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let handler = ExtractionHandler::new(&cli)?;
    let message = read_message(cli.message.as_deref(), cli.input.as_deref())?;
    handler.run(&message)
}
