//! Integration tests: JSON snapshot files → CLI output
//!
//! Writes snapshot files to a temp dir, loads them through the command layer
//! and through the CLI argument merge, and checks the rendered result.

use std::fs;

use clap::Parser;
use superserial_lib::cli::{execute, Args};
use superserial_lib::commands::{load_configuration, resolve_switches};
use superserial_lib::domain::{OperationMode, Parity};

fn write_snapshot(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("ssc.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn load_printer_snapshot_and_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(
        &dir,
        r#"{
            "jumper_mode": "printer",
            "operation_mode": "printer",
            "baud_rate": "300",
            "line_width": "40",
            "return_delay": true
        }"#,
    );

    let config = load_configuration(&path).unwrap();
    assert_eq!(config.operation_mode, OperationMode::Printer);

    let report = resolve_switches(&config);
    assert_eq!(
        report.sw1.switches(),
        &[true, false, false, true, false, true, true]
    );
    assert_eq!(
        report.sw2.switches(),
        &[true, true, true, true, false, true, true]
    );
    assert_eq!(report.summary[0], "Jumper Block: Arrow DOWN (Printer)");
}

#[test]
fn unknown_baud_in_snapshot_falls_back_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&dir, r#"{"baud_rate": "38400"}"#);

    let config = load_configuration(&path).unwrap();
    let report = resolve_switches(&config);
    assert_eq!(&report.sw1.switches()[..4], &[false, false, false, true]);
    // The summary still reports what was asked for
    assert_eq!(report.summary[2], "Baud Rate: 38400");
}

#[test]
fn malformed_snapshot_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&dir, r#"{"parity": "space"}"#);
    let err = load_configuration(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn cli_flags_override_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&dir, r#"{"parity": "even", "baud_rate": "1200"}"#);

    let args = Args::try_parse_from([
        "superserial",
        "--config",
        path.to_str().unwrap(),
        "--parity",
        "odd",
    ])
    .unwrap();
    let config = args.configuration().unwrap();
    assert_eq!(config.parity, Parity::Odd);
    assert_eq!(config.baud_rate, "1200");
}

#[test]
fn cli_renders_text_report_from_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&dir, r#"{"stop_bits": "2", "data_bits": "7"}"#);

    let args = Args::try_parse_from(["superserial", "-c", path.to_str().unwrap()]).unwrap();
    let out = execute(&args).unwrap();
    assert!(out.contains("    OFF OFF OFF ON  OFF ON  OFF"));
    assert!(out.contains("• Data Format: 7 data bits, none parity, 2 stop bits"));
}

#[test]
fn cli_reports_missing_snapshot() {
    let args = Args::try_parse_from(["superserial", "--config", "/nonexistent/ssc.json"]).unwrap();
    assert!(execute(&args).is_err());
}

#[test]
fn snapshot_line_width_as_string_or_number() {
    let dir = tempfile::tempdir().unwrap();
    for width in [r#""40""#, "40"] {
        let path = write_snapshot(
            &dir,
            &format!(r#"{{"operation_mode": "printer", "line_width": {width}}}"#),
        );
        let report = resolve_switches(&load_configuration(&path).unwrap());
        assert_eq!(&report.sw2.switches()[2..4], &[true, true], "width {width}");
        assert_eq!(report.sw2.position(7), Some(true), "width {width}");
    }
}

#[test]
fn corrupted_line_width_falls_back_to_80_columns() {
    let dir = tempfile::tempdir().unwrap();
    for width in [r#""wide""#, r#""""#, "true", "-1", "64"] {
        let path = write_snapshot(
            &dir,
            &format!(r#"{{"operation_mode": "printer", "line_width": {width}}}"#),
        );
        let config = load_configuration(&path).unwrap();
        let report = resolve_switches(&config);
        assert_eq!(&report.sw2.switches()[2..4], &[false, true], "width {width}");
        assert_eq!(report.sw2.position(7), Some(false), "width {width}");
    }
}

/// Every on/off option in a snapshot can be flipped either way from the command line.
#[test]
fn cli_boolean_flags_override_snapshot_both_ways() {
    let dir = tempfile::tempdir().unwrap();
    let on = write_snapshot(
        &dir,
        r#"{"enable_interrupts": true, "auto_line_feed": true, "return_delay": true}"#,
    );
    let path = on.to_str().unwrap();
    let args = Args::try_parse_from([
        "superserial",
        "-c",
        path,
        "--interrupts",
        "false",
        "--auto-line-feed",
        "false",
        "--return-delay",
        "false",
    ])
    .unwrap();
    let config = args.configuration().unwrap();
    assert!(!config.enable_interrupts);
    assert!(!config.auto_line_feed);
    assert!(!config.return_delay);

    let off = dir.path().join("off.json");
    fs::write(
        &off,
        r#"{"enable_interrupts": false, "auto_line_feed": false, "return_delay": false}"#,
    )
    .unwrap();
    let path = off.to_str().unwrap();
    let args = Args::try_parse_from([
        "superserial",
        "-c",
        path,
        "--interrupts",
        "--auto-line-feed",
        "--return-delay",
    ])
    .unwrap();
    let config = args.configuration().unwrap();
    assert!(config.enable_interrupts);
    assert!(config.auto_line_feed);
    assert!(config.return_delay);

    // Flags left out keep the snapshot's values
    let args = Args::try_parse_from(["superserial", "-c", path]).unwrap();
    let config = args.configuration().unwrap();
    assert!(!config.enable_interrupts);
    assert!(!config.auto_line_feed);
    assert!(!config.return_delay);
}
