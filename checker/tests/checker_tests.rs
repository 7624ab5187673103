//! End-to-end runs of the checker against files on disk.

use clap::Parser;
use json_check::{CheckError, Cli, Outcome, run};
use json_decoder::ErrorKind;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Workspace { dir: tempdir().unwrap() }
    }

    fn file(&self, name: &str, content: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("check.log")
    }

    /// Writes a configuration that logs at `level` into this workspace.
    fn config(&self, decoder: &str, level: &str) -> String {
        let log_path = self.log_path().to_string_lossy().replace('\\', "\\\\");
        self.file(
            "json-check.json",
            &format!(
                r#"{{"decoder": {}, "logging": {{"log_file_path": "{}", "log_level": "{}"}}}}"#,
                decoder, log_path, level
            ),
        )
    }
}

fn cli(config: &str, rest: &[&str]) -> Cli {
    let mut args = vec!["json-check", "--config", config];
    args.extend_from_slice(rest);
    Cli::try_parse_from(args).unwrap()
}

fn read_log(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn test_valid_and_invalid_documents() {
    let ws = Workspace::new();
    let config = ws.config("{}", "info");
    let good = ws.file("good.json", r#"{"users": [{"id": 1}, {"id": 2}]}"#);
    let bad = ws.file("bad.json", r#"{"a": 1,}"#);

    let summary = run(&cli(&config, &[good.as_str(), bad.as_str()])).unwrap();
    let lines: Vec<String> = summary.lines(false).collect();

    assert_eq!(lines[0], format!("OK {}: object (6 values, depth 3)", good));
    assert!(lines[1].starts_with(&format!("FAIL {}: ", bad)));
    assert!(lines[1].contains("at position 9 (line 1, column 9)"));
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn test_config_depth_limit_applies() {
    let ws = Workspace::new();
    let config = ws.config(r#"{"max_depth": 2}"#, "info");
    let doc = ws.file("deep.json", "[[[1]]]");

    let summary = run(&cli(&config, &[doc.as_str()])).unwrap();
    match &summary.reports[0].outcome {
        Outcome::Invalid(err) => {
            assert_eq!(err.kind(), ErrorKind::MaxDepthExceeded);
            assert_eq!(err.position(), 3);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let summary = run(&cli(&config, &["--no-depth-limit", doc.as_str()])).unwrap();
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn test_control_characters_flag() {
    let ws = Workspace::new();
    let config = ws.config("{}", "info");
    let doc = ws.file("tab.json", "[\"a\tb\"]");

    let summary = run(&cli(&config, &[doc.as_str()])).unwrap();
    assert_eq!(summary.exit_code(), 1);

    let summary = run(&cli(&config, &["--allow-control-characters", doc.as_str()])).unwrap();
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn test_unreadable_document() {
    let ws = Workspace::new();
    let config = ws.config("{}", "info");
    let missing = ws.dir.path().join("missing.json");
    let missing = missing.to_string_lossy().into_owned();

    let summary = run(&cli(&config, &[missing.as_str()])).unwrap();
    assert!(matches!(summary.reports[0].outcome, Outcome::Unreadable(_)));
    assert_eq!(summary.exit_code(), 2);
}

#[test]
fn test_log_records_checker_and_decoder() {
    let ws = Workspace::new();
    let config = ws.config("{}", "debug");
    let good = ws.file("good.json", "[1]");
    let bad = ws.file("bad.json", "nul");

    run(&cli(&config, &[good.as_str(), bad.as_str()])).unwrap();

    let log = read_log(&ws.log_path());
    assert!(log.contains("INFO [component: Checker]: Checking 2 document(s), max depth 128"));
    assert!(log.contains("DEBUG [component: Decoder]: Decoded top-level array"));
    assert!(log.contains("WARN [component: Decoder]: Rejected document"));
    assert!(log.contains(&format!("WARN [component: Checker]: FAIL {}", bad)));
    assert!(log.contains("Checked 2 document(s), 1 failed"));
}

#[test]
fn test_log_level_flag_overrides_config() {
    let ws = Workspace::new();
    let config = ws.config("{}", "debug");
    let good = ws.file("good.json", "[1]");

    run(&cli(&config, &["--log-level", "warn", good.as_str()])).unwrap();
    assert!(!read_log(&ws.log_path()).contains("Decoded top-level"));
}

#[test]
fn test_setup_errors() {
    let ws = Workspace::new();
    let good = ws.file("good.json", "[]");

    let broken = ws.file("broken.json", r#"{"decoder": "#);
    assert!(matches!(
        run(&cli(&broken, &[good.as_str()])),
        Err(CheckError::Decode(_))
    ));

    let wrong_type = ws.file("wrong.json", r#"{"decoder": {"max_depth": true}}"#);
    assert!(matches!(
        run(&cli(&wrong_type, &[good.as_str()])),
        Err(CheckError::Config(_))
    ));

    let config = ws.config("{}", "info");
    assert!(matches!(
        run(&cli(&config, &["--log-level", "loud", good.as_str()])),
        Err(CheckError::Logging(_))
    ));

    let absent = ws.dir.path().join("absent.json");
    assert!(matches!(
        run(&cli(&absent.to_string_lossy(), &[good.as_str()])),
        Err(CheckError::Load(_))
    ));
}
