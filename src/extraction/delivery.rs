//! Handing an extraction result to its consumers.
//!
//! A [`CodeSink`] takes a found code (the clipboard writer's role) and a
//! [`Notifier`] tells the user what happened (the desktop toast's role).
//! Neither can change the result: their failures are logged and counted.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{SmsCodeError, SmsCodeResult};

/// Receives a found verification code.
pub trait CodeSink: Send + Sync {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> &str;

    /// Accepts the code.
    fn deliver(&self, code: &str) -> SmsCodeResult<()>;
}

/// Prints the code on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl CodeSink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    fn deliver(&self, code: &str) -> SmsCodeResult<()> {
        writeln!(io::stdout().lock(), "{}", code).map_err(|e| SmsCodeError::Delivery {
            sink: self.name().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Writes the code to a file, replacing its contents.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CodeSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn deliver(&self, code: &str) -> SmsCodeResult<()> {
        fs::write(&self.path, code).map_err(|source| SmsCodeError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// How a notification is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationConfig {
    /// How long the notification stays visible, for presenters that can
    /// dismiss what they show. [`ConsoleNotifier`] only logs it.
    pub duration: Duration,

    /// Present without blocking the caller
    pub threaded: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(3),
            threaded: true,
        }
    }
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub config: NotificationConfig,
}

impl Notification {
    /// Confirms that `code` was handed to the sinks.
    pub fn success(code: &str, config: NotificationConfig) -> Self {
        Self {
            title: "Code copied".to_string(),
            message: format!("Verification code {} is ready to paste", code),
            config,
        }
    }

    /// Flags that no code was found.
    pub fn failure(config: NotificationConfig) -> Self {
        Self {
            title: "No code found".to_string(),
            message: "Check the message for a verification code".to_string(),
            config,
        }
    }
}

/// A notification that has been shown or is being shown.
#[derive(Debug)]
pub enum Presentation {
    /// Presented before `notify` returned
    Shown,

    /// Presenting on a background thread
    Pending(JoinHandle<()>),
}

impl Presentation {
    /// Blocks until a pending presentation finishes.
    pub fn wait(self) -> SmsCodeResult<()> {
        match self {
            Self::Shown => Ok(()),
            Self::Pending(handle) => handle.join().map_err(|_| SmsCodeError::Notification {
                reason: "presentation thread panicked".to_string(),
            }),
        }
    }
}

/// Presents notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> SmsCodeResult<Presentation>;
}

/// Writes notifications to standard error as `[title] message`.
///
/// A printed line cannot be taken back, so `duration` has no effect on
/// presentation: the line is written once and `notify` (or the pending
/// thread) finishes without waiting. Only `threaded` changes behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn render(notification: &Notification) -> String {
        format!("[{}] {}", notification.title, notification.message)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) -> SmsCodeResult<Presentation> {
        let line = Self::render(notification);
        debug!(
            duration_secs = notification.config.duration.as_secs_f32(),
            threaded = notification.config.threaded,
            "presenting notification"
        );

        if !notification.config.threaded {
            eprintln!("{}", line);
            return Ok(Presentation::Shown);
        }

        thread::Builder::new()
            .name("smscode-notify".to_string())
            .spawn(move || eprintln!("{}", line))
            .map(Presentation::Pending)
            .map_err(|e| SmsCodeError::Notification {
                reason: e.to_string(),
            })
    }
}

/// What happened while delivering a result.
#[derive(Debug, Default)]
pub struct DeliveryOutcome {
    /// Sinks that accepted the code
    pub sinks_succeeded: usize,

    /// Sink and notifier failures, in order
    pub failures: Vec<SmsCodeError>,

    /// The notification presented, if any
    pub presentation: Option<Presentation>,
}

impl DeliveryOutcome {
    /// Returns true if nothing failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Waits for a pending notification, recording a failure if it panicked.
    pub fn finish(mut self) -> Self {
        if let Some(presentation) = self.presentation.take() {
            if let Err(err) = presentation.wait() {
                warn!(error = %err, "notification did not complete");
                self.failures.push(err);
            }
        }
        self
    }
}

/// Hands `code` to every sink, then notifies success or failure.
///
/// Sinks only run for a found code. Failures are collected in the
/// outcome and never stop the remaining sinks.
pub fn deliver(
    code: Option<&str>,
    sinks: &[Box<dyn CodeSink>],
    notifier: Option<&dyn Notifier>,
    config: NotificationConfig,
) -> DeliveryOutcome {
    let mut outcome = DeliveryOutcome::default();

    let notification = match code {
        Some(code) => {
            for sink in sinks {
                match sink.deliver(code) {
                    Ok(()) => outcome.sinks_succeeded += 1,
                    Err(err) => {
                        warn!(sink = sink.name(), error = %err, "sink rejected code");
                        outcome.failures.push(err);
                    }
                }
            }
            Notification::success(code, config)
        }
        None => Notification::failure(config),
    };

    if let Some(notifier) = notifier {
        match notifier.notify(&notification) {
            Ok(presentation) => outcome.presentation = Some(presentation),
            Err(err) => {
                warn!(error = %err, "notification failed");
                outcome.failures.push(err);
            }
        }
    }

    outcome
}
