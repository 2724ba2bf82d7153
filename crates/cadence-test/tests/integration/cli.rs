//! End-to-end command handling without spawning the binary.

use cadence_test::component::cli::{Cli, run};
use cadence_test::component::repeat::RepeatEventManager;
use clap::Parser;

fn run_args(args: &[&str], stdin: &str) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    run(&cli, &RepeatEventManager::default(), stdin.as_bytes())
}

const DRAFT: &str = r#"{
    "title": "Quarterly review",
    "date": "2024-01-31",
    "startTime": "14:00",
    "endTime": "15:30",
    "description": "",
    "location": "",
    "category": "Work",
    "notificationTime": 60,
    "repeat": { "type": "monthly", "interval": 3, "endDate": "2024-12-31" }
}"#;

#[test]
fn dates_command_prints_one_date_per_line() {
    let output = run_args(
        &[
            "cadence",
            "dates",
            "--date",
            "2024-01-31",
            "--type",
            "monthly",
            "--end-date",
            "2024-07-31",
        ],
        "",
    )
    .unwrap();

    assert_eq!(output, "2024-01-31\n2024-03-31\n2024-05-31\n2024-07-31");
}

#[test]
fn dates_command_defaults_to_single_occurrence() {
    let output = run_args(&["cadence", "dates", "--date", "2024-06-01"], "").unwrap();

    assert_eq!(output, "2024-06-01");
}

#[test]
fn dates_command_rejects_unknown_type() {
    let parsed = Cli::try_parse_from([
        "cadence", "dates", "--date", "2024-06-01", "--type", "hourly",
    ]);

    assert!(parsed.is_err());
}

#[test]
fn dates_command_reports_zero_interval() {
    let err = run_args(
        &[
            "cadence",
            "dates",
            "--date",
            "2024-06-01",
            "--type",
            "daily",
            "--interval",
            "0",
        ],
        "",
    )
    .unwrap_err()
    .to_string();

    assert!(err.contains("interval"), "{err}");
}

#[test_log::test]
fn expand_command_reads_draft_from_stdin() {
    let output = run_args(&["cadence", "expand", "-"], DRAFT).unwrap();

    let events: serde_json::Value = serde_json::from_str(&output).unwrap();
    let events = events.as_array().expect("array of events");

    // There is no April 31st
    let dates: Vec<&str> = events
        .iter()
        .map(|event| event["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2024-01-31", "2024-07-31", "2024-10-31"]);
    assert!(events.iter().all(|event| event["isRepeatEvent"] == true));
    assert!(events.iter().all(|event| event["startTime"] == "14:00"));
}

#[test]
fn expand_command_reports_missing_file() {
    let err = run_args(&["cadence", "expand", "/nonexistent/draft.json"], "")
        .unwrap_err()
        .to_string();

    assert!(err.contains("Failed to read draft"), "{err}");
}

#[test]
fn expand_command_until_bounds_open_ended_draft() {
    let open_ended = r#"{
        "title": "Standup",
        "date": "2024-01-01",
        "startTime": "09:00",
        "endTime": "09:15",
        "description": "",
        "location": "",
        "category": "Work",
        "notificationTime": 5,
        "repeat": { "type": "weekly", "interval": 1 }
    }"#;

    let output = run_args(&["cadence", "expand", "-", "--until", "2024-01-15"], open_ended).unwrap();

    let events: serde_json::Value = serde_json::from_str(&output).unwrap();
    let dates: Vec<&str> = events
        .as_array()
        .expect("array of events")
        .iter()
        .map(|event| event["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2024-01-01", "2024-01-08", "2024-01-15"]);
}
