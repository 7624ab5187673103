//! Checks documents and collects their reports.

use crate::cli::Cli;
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::report::{FileReport, Outcome, TreeStats};
use config_loader::read_source;
use json_decoder::{ParseOptions, parse_with_options};
use logging::Logger;

/// Reports for every document of one run.
#[derive(Debug)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    pub fn failures(&self) -> usize {
        self.reports.iter().filter(|report| !report.is_ok()).count()
    }

    /// 0 when every document is valid, 1 when one is invalid and 2 when one
    /// could not be read.
    pub fn exit_code(&self) -> u8 {
        let unreadable = self
            .reports
            .iter()
            .any(|report| matches!(report.outcome, Outcome::Unreadable(_)));

        if unreadable {
            2
        } else if self.failures() > 0 {
            1
        } else {
            0
        }
    }

    /// Output lines in input order. `quiet` keeps only the failures.
    pub fn lines(&self, quiet: bool) -> impl Iterator<Item = String> + '_ {
        self.reports
            .iter()
            .filter(move |report| !quiet || !report.is_ok())
            .map(ToString::to_string)
    }
}

/// Decodes one document that has already been read.
pub fn check_document(source: &str, content: &str, options: &ParseOptions) -> FileReport {
    let outcome = match parse_with_options(content, options) {
        Ok(value) => Outcome::Valid {
            kind: value.kind(),
            stats: TreeStats::measure(&value),
        },
        Err(err) => Outcome::Invalid(err),
    };
    FileReport::new(source, outcome)
}

/// Reads and decodes each source in order. A source that cannot be read
/// is reported and the remaining ones are still checked.
pub fn check_sources<'s, I>(sources: I, options: &ParseOptions, logger: &Logger) -> Vec<FileReport>
where
    I: IntoIterator<Item = &'s str>,
{
    sources
        .into_iter()
        .map(|source| {
            let report = match read_source(source) {
                Ok(content) => check_document(source, &content, options),
                Err(err) => FileReport::new(source, Outcome::Unreadable(err)),
            };

            if report.is_ok() {
                logger.info(&report.to_string());
            } else {
                logger.warn(&report.to_string());
            }
            report
        })
        .collect()
}

/// Loads the configuration, applies the command-line overrides and checks
/// every file named on the command line.
pub fn run(cli: &Cli) -> Result<RunSummary> {
    let mut config = match &cli.config {
        Some(path) => CheckerConfig::load_from_file(path)?,
        None => CheckerConfig::discover()?,
    };
    cli.apply_to(&mut config);

    let logger = config.logging.build_logger()?;
    logger.info(&format!(
        "Checking {} document(s), max depth {}",
        cli.files.len(),
        config
            .decoder
            .max_depth
            .map_or_else(|| "unlimited".to_string(), |depth| depth.to_string())
    ));

    let options = config
        .decoder
        .to_options()
        .with_logger(logger.for_component("Decoder"));
    let reports = check_sources(cli.files.iter().map(String::as_str), &options, &logger);

    let summary = RunSummary { reports };
    logger.info(&format!(
        "Checked {} document(s), {} failed",
        summary.reports.len(),
        summary.failures()
    ));
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_decoder::{ErrorKind, ValueKind};
    use logging::LogLevel;
    use std::fs;
    use std::io;
    use tempfile::tempdir;

    #[test]
    fn test_check_document_valid() {
        let report = check_document("doc", r#"{"a": [1, 2]}"#, &ParseOptions::default());
        match report.outcome {
            Outcome::Valid { kind, stats } => {
                assert_eq!(kind, ValueKind::Object);
                assert_eq!(stats, TreeStats { values: 4, depth: 2 });
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_check_document_honours_options() {
        let strict = ParseOptions::new().with_max_depth(1);
        let report = check_document("doc", "[[1]]", &strict);
        match report.outcome {
            Outcome::Invalid(err) => assert_eq!(err.kind(), ErrorKind::MaxDepthExceeded),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_check_sources_keeps_going() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        let missing = dir.path().join("missing.json");
        fs::write(&good, "[true]").unwrap();
        fs::write(&bad, "[true").unwrap();

        let paths = [&good, &missing, &bad].map(|p| p.to_string_lossy().into_owned());
        let logger = Logger::from_writer(io::sink(), LogLevel::Info);
        let reports = check_sources(
            paths.iter().map(String::as_str),
            &ParseOptions::default(),
            &logger,
        );

        assert_eq!(reports.len(), 3);
        assert!(reports[0].is_ok());
        assert!(matches!(reports[1].outcome, Outcome::Unreadable(_)));
        assert!(matches!(reports[2].outcome, Outcome::Invalid(_)));
        assert_eq!(reports[2].source, paths[2]);
    }

    #[test]
    fn test_summary_exit_codes() {
        let options = ParseOptions::default();
        let ok = || check_document("ok", "1", &options);
        let invalid = || check_document("bad", "[", &options);

        let all_ok = RunSummary { reports: vec![ok(), ok()] };
        assert_eq!(all_ok.exit_code(), 0);
        assert_eq!(all_ok.failures(), 0);

        let some_invalid = RunSummary { reports: vec![ok(), invalid()] };
        assert_eq!(some_invalid.exit_code(), 1);
        assert_eq!(some_invalid.failures(), 1);

        let unreadable = FileReport::new(
            "gone",
            Outcome::Unreadable(config_loader::ConfigError::FileNotFound("gone".to_string())),
        );
        let with_unreadable = RunSummary {
            reports: vec![invalid(), unreadable],
        };
        assert_eq!(with_unreadable.exit_code(), 2);
    }

    #[test]
    fn test_quiet_lines() {
        let options = ParseOptions::default();
        let summary = RunSummary {
            reports: vec![
                check_document("a", "[]", &options),
                check_document("b", "{", &options),
            ],
        };

        let all: Vec<String> = summary.lines(false).collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], "OK a: array (1 values, depth 1)");

        let quiet: Vec<String> = summary.lines(true).collect();
        assert_eq!(quiet.len(), 1);
        assert!(quiet[0].starts_with("FAIL b: "));
    }
}
