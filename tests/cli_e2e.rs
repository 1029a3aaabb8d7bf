//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary against archive files in a temp dir
//! and check the printed report and exit status.
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with two archive parts and a broken file.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    // "Привет" and "Иван" as the export stores them
    let part1 = r#"{
  "participants": [{"name": "Ð\u0098Ð²Ð°Ð½"}, {"name": "Alice"}],
  "messages": [
    {"sender_name": "Ð\u0098Ð²Ð°Ð½", "timestamp_ms": 1718452800000, "content": "Ð\u009fÑ\u0080Ð¸Ð²ÐµÑ\u0082"},
    {"sender_name": "Alice", "timestamp_ms": 1718452700000, "content": "Liked a message"},
    {"sender_name": "Alice", "timestamp_ms": 1718452600000, "share": {"link": "https://example.com/p/1"}},
    {"sender_name": "Alice", "timestamp_ms": 1718452500000, "content": "first message of the summer"}
  ]
}"#;
    fs::write(dir.path().join("message_1.json"), part1).unwrap();

    let part2 = r#"{
  "participants": [{"name": "Alice"}, {"name": "Bob"}],
  "messages": [
    {"sender_name": "Bob", "timestamp_ms": 1704110400000, "content": "happy new year"},
    {"sender_name": "Bob", "timestamp_ms": 1704110300000, "content": "Reacted ❤ to your message"}
  ]
}"#;
    fs::write(dir.path().join("message_2.json"), part2).unwrap();

    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    dir
}

fn chatlens_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlens"));
    Command::from_std(cmd)
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

// ============================================================================
// Report
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn test_single_archive_report() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "message_1.json"))
            .assert()
            .success()
            .stdout(predicate::str::starts_with("CHAT INFORMATION"))
            .stdout(predicate::str::contains("• Alice\n• Иван\n"))
            .stdout(predicate::str::contains("• message_1.json: 3 messages"))
            .stdout(predicate::str::contains("• Total messages: 3"))
            .stdout(predicate::str::contains("Иван --- Привет"))
            .stdout(predicate::str::contains("[Shared link: https://example.com/p/1]"))
            .stdout(predicate::str::contains("Liked a message").not());
    }

    #[test]
    fn test_multiple_archives_are_merged() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                fixture(&fixtures, "message_1.json"),
                fixture(&fixtures, "message_2.json"),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("• Bob\n"))
            .stdout(predicate::str::contains("• message_2.json: 1 messages"))
            .stdout(predicate::str::contains("• Total messages: 4"))
            .stdout(predicate::str::contains("Reacted").not());
    }

    #[test]
    fn test_sections_present() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "message_1.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("MESSAGE STATISTICS"))
            .stdout(predicate::str::contains("LONGEST MESSAGES"))
            .stdout(predicate::str::contains("TOP WORDS"))
            .stdout(predicate::str::contains("MESSAGES (Newest First)"));
    }

    #[test]
    fn test_no_timeline_and_oldest_first() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "message_1.json"), "--no-timeline"])
            .assert()
            .success()
            .stdout(predicate::str::contains("MESSAGES (").not());

        chatlens_cmd()
            .args([&fixture(&fixtures, "message_1.json"), "--oldest-first"])
            .assert()
            .success()
            .stdout(predicate::str::contains("MESSAGES (Oldest First)"));
    }

    #[test]
    fn test_json_report() {
        let fixtures = setup_fixtures();

        let output = chatlens_cmd()
            .args([&fixture(&fixtures, "message_1.json"), "--json", "--longest", "1"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["total_messages"], 3);
        assert_eq!(report["participants"][1], "Иван");
        assert_eq!(report["longest"].as_array().unwrap().len(), 1);
        assert_eq!(
            report["longest"][0]["content"],
            "[Shared link: https://example.com/p/1]"
        );
    }

    #[test]
    fn test_no_fix_encoding_keeps_mojibake() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "message_1.json"), "--no-fix-encoding"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Привет").not());
    }
}

// ============================================================================
// Filters
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_from_filter() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                &fixture(&fixtures, "message_1.json"),
                &fixture(&fixtures, "message_2.json"),
                "--from",
                "bob",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("• Total messages: 1"))
            .stdout(predicate::str::contains("Bob --- happy new year"));
    }

    #[test]
    fn test_date_filters() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                &fixture(&fixtures, "message_1.json"),
                &fixture(&fixtures, "message_2.json"),
                "--after",
                "2024-06-01",
            ])
            .env("TZ", "UTC")
            .assert()
            .success()
            .stdout(predicate::str::contains("• Total messages: 3"))
            .stdout(predicate::str::contains("happy new year").not());

        chatlens_cmd()
            .args([
                &fixture(&fixtures, "message_1.json"),
                &fixture(&fixtures, "message_2.json"),
                "--before",
                "2024-01-01",
            ])
            .env("TZ", "UTC")
            .assert()
            .success()
            .stdout(predicate::str::contains("• Total messages: 1"));
    }

    #[test]
    fn test_date_filters_use_local_day() {
        let dir = tempdir().unwrap();
        // 2024-06-01 03:30 UTC, still May 31 at UTC-5
        let archive = r#"{"messages": [
            {"sender_name": "Alice", "timestamp_ms": 1717212600000, "content": "late night"}
        ]}"#;
        fs::write(dir.path().join("message_1.json"), archive).unwrap();

        chatlens_cmd()
            .args([&fixture(&dir, "message_1.json"), "--after", "2024-06-01"])
            .env("TZ", "EST5")
            .assert()
            .success()
            .stdout(predicate::str::contains("• Total messages: 0"));

        chatlens_cmd()
            .args([&fixture(&dir, "message_1.json"), "--before", "2024-05-31"])
            .env("TZ", "EST5")
            .assert()
            .success()
            .stdout(predicate::str::contains("• Total messages: 1"))
            .stdout(predicate::str::contains("2024-05-31 22:30"));

        chatlens_cmd()
            .args([&fixture(&dir, "message_1.json"), "--after", "2024-06-01"])
            .env("TZ", "UTC")
            .assert()
            .success()
            .stdout(predicate::str::contains("• Total messages: 1"));
    }

    #[test]
    fn test_invalid_date_fails() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&fixture(&fixtures, "message_1.json"), "--after", "June 1st"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("YYYY-MM-DD"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_no_input_is_usage_error() {
        chatlens_cmd().assert().failure().code(2);
    }

    #[test]
    fn test_broken_archive_is_reported_not_fatal() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                fixture(&fixtures, "broken.json"),
                fixture(&fixtures, "message_1.json"),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("• broken.json: failed ("))
            .stdout(predicate::str::contains("• Total messages: 3"))
            .stderr(predicate::str::contains("failed to load archive"));
    }

    #[test]
    fn test_missing_archive_is_reported_not_fatal() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(fixture(&fixtures, "nope.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("• nope.json: failed ("))
            .stdout(predicate::str::contains("• Total messages: 0"));
    }

    #[test]
    fn test_file_output_flags_are_rejected() {
        let fixtures = setup_fixtures();
        let target = fixture(&fixtures, "cleaned.csv");

        chatlens_cmd()
            .args([&fixture(&fixtures, "message_1.json"), "-o", &target])
            .assert()
            .failure()
            .code(2);
        assert!(!fixtures.path().join("cleaned.csv").exists());
    }

    #[test]
    fn test_help() {
        chatlens_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--top-words"))
            .stdout(predicate::str::contains("EXAMPLES"));
    }
}
