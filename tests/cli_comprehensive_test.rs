//! Comprehensive CLI integration tests.
//!
//! Tests argument parsing, message sources, output files, notifications
//! and exit status using the actual binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::*;

/// Creates a test Command for the smscode binary.
fn smscode_cmd() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("smscode")
}

/// Tests basic CLI argument parsing and help output.
mod argument_parsing {
    use super::*;

    #[test]
    fn test_help_flag() {
        smscode_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--keyword"))
            .stdout(predicate::str::contains("--input"))
            .stdout(predicate::str::contains("--output"))
            .stdout(predicate::str::contains("--radius"));
    }

    #[test]
    fn test_version_flag() {
        smscode_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("smscode"));
    }

    #[test]
    fn test_message_conflicts_with_input() {
        smscode_cmd()
            .args(["--input", "message.txt", "OTP 4821"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
    }

    #[test]
    fn test_duration_requires_notify() {
        smscode_cmd()
            .args(["--duration", "5", "验证码123456"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--notify"));
    }

    #[test]
    fn test_invalid_keyword_pattern() {
        smscode_cmd()
            .args(["--keyword", "(OTP", "OTP 4821"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid keyword pattern"));
    }

    #[test]
    fn test_invalid_length_bounds() {
        smscode_cmd()
            .args(["--min-len", "9", "OTP 4821"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("max_code_len"));
    }
}

/// Tests the message sources.
mod message_sources {
    use super::*;

    #[test]
    fn test_message_argument_default_keyword() {
        smscode_cmd()
            .arg(WECHAT_PAY)
            .assert()
            .success()
            .stdout("754207\n");
    }

    #[test]
    fn test_custom_keyword() {
        smscode_cmd()
            .args(["--keyword", "OTP", LATIN_OTP])
            .assert()
            .success()
            .stdout("4821\n");
    }

    #[test]
    fn test_stdin() {
        smscode_cmd()
            .write_stdin(SPACED_CODE)
            .assert()
            .success()
            .stdout("754207\n");
    }

    #[test]
    fn test_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("message.txt");
        fs::write(&input, ALPHANUMERIC_CODE).unwrap();

        smscode_cmd()
            .arg("--input")
            .arg(&input)
            .assert()
            .success()
            .stdout("Ab3dE9\n");
    }

    #[test]
    fn test_missing_input_file() {
        smscode_cmd()
            .args(["--input", "/nonexistent/message.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read message"));
    }
}

/// Tests result delivery and exit status.
mod delivery {
    use super::*;

    #[test]
    fn test_no_code_fails() {
        smscode_cmd()
            .arg("您的快递已到达驿站")
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("No verification code found"));
    }

    #[test]
    fn test_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("code.txt");

        smscode_cmd()
            .arg("--output")
            .arg(&output)
            .arg(WECHAT_PAY)
            .assert()
            .success()
            .stdout("754207\n");

        assert_eq!(fs::read_to_string(&output).unwrap(), "754207");
    }

    #[test]
    fn test_unwritable_output_reports_error() {
        smscode_cmd()
            .args(["--output", "/nonexistent/dir/code.txt", WECHAT_PAY])
            .assert()
            .failure()
            .stdout("754207\n")
            .stderr(predicate::str::contains("Failed to deliver"));
    }

    #[test]
    fn test_success_notification() {
        smscode_cmd()
            .args(["--notify", WECHAT_PAY])
            .assert()
            .success()
            .stderr(predicate::str::contains("[Code copied]"))
            .stderr(predicate::str::contains("754207"));
    }

    #[test]
    fn test_failure_notification_blocking() {
        smscode_cmd()
            .args(["--notify", "--blocking", "--duration", "1", "nothing here"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("[No code found]"));
    }

    #[test]
    fn test_verbose_logs_analysis() {
        smscode_cmd()
            .args(["-v", WECHAT_PAY])
            .assert()
            .success()
            .stderr(predicate::str::contains("analyzed message"));
    }
}
