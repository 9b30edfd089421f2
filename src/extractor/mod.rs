pub mod annotate;
pub mod classify;
pub mod duration;
pub mod name;
pub mod trx;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info};

use crate::error::{ExtractError, InputError, ParseError};
use crate::models::{Outcome, ResultSummary, SummaryCounters, TestOutcomeRecord};

use self::classify::classify_failure;
use self::trx::RawResult;

const UNKNOWN_TEST: &str = "Unknown Test";
const UNKNOWN_OUTCOME: &str = "Unknown";

/// Knobs for a single extraction.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Fill `expected_result` and `endpoint` from the name tables.
    pub annotations: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { annotations: true }
    }
}

/// Parse a TRX document into a summary with default options.
pub fn parse(document: &str) -> Result<ResultSummary, ParseError> {
    parse_with(document, &ExtractOptions::default())
}

/// Parse a TRX document into a summary.
///
/// Only structural problems fail; per-record anomalies fall back to defaults.
pub fn parse_with(document: &str, options: &ExtractOptions) -> Result<ResultSummary, ParseError> {
    let doc = trx::read_document(document)?;

    let mut counters = SummaryCounters::default();
    let mut details = Vec::new();

    for raw in &doc.results {
        let outcome = Outcome::from_label(raw.outcome.as_deref().unwrap_or(UNKNOWN_OUTCOME));
        counters.record(&outcome);

        if outcome == Outcome::Skipped {
            continue;
        }
        if !outcome.is_executed() {
            debug!(test = ?raw.test_name, %outcome, "unrecognized outcome, kept out of the success rate");
        }

        details.push(build_record(raw, outcome, &doc.definitions, options));
    }

    let summary = counters.into_summary(details);
    info!(
        total = summary.total_tests,
        passed = summary.passed_tests,
        failed = summary.failed_tests,
        skipped = summary.skipped_tests,
        "parsed TRX document"
    );
    Ok(summary)
}

/// Read and parse a TRX file.
pub fn parse_file(path: &Path, options: &ExtractOptions) -> Result<ResultSummary, ExtractError> {
    if !path.exists() {
        return Err(InputError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let bytes = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = std::str::from_utf8(&bytes).map_err(ParseError::from)?;
    Ok(parse_with(document, options)?)
}

/// Resolve the `--trx` argument: a file is used as is, a directory yields its
/// most recently modified `*.trx`.
pub fn resolve_input(path: &Path) -> Result<PathBuf, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }

    let pattern = format!(
        "{}/*.trx",
        glob::Pattern::escape(&path.to_string_lossy())
    );
    let newest = glob::glob(&pattern)
        .ok()
        .into_iter()
        .flatten()
        .flatten()
        .filter(|entry| entry.is_file())
        .max_by_key(|entry| {
            entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH)
        });

    newest.ok_or_else(|| InputError::NoTrxInDirectory {
        dir: path.to_path_buf(),
    })
}

fn build_record(
    raw: &RawResult,
    outcome: Outcome,
    definitions: &HashMap<String, String>,
    options: &ExtractOptions,
) -> TestOutcomeRecord {
    let test_name = raw.test_name.as_deref().unwrap_or(UNKNOWN_TEST);
    let (class_name, display_name) = name::split_test_name(test_name);
    let duration_ms = duration::parse_duration_ms(raw.duration.as_deref().unwrap_or("0"));

    let mut record = TestOutcomeRecord {
        display_name,
        fully_qualified_name: test_name.to_string(),
        class_name,
        duration_ms,
        start_time: raw.start_time.clone().unwrap_or_default(),
        ..TestOutcomeRecord::default()
    };

    if outcome == Outcome::Failed {
        let classification =
            classify_failure(raw.error_message.as_deref(), raw.std_out.as_deref());
        debug!(
            test = test_name,
            actual = %classification.actual_result,
            reason = %classification.failure_reason,
            "classified failure"
        );
        record.actual_result = classification.actual_result;
        record.failure_reason = classification.failure_reason;
        record.stack_trace = raw
            .stack_trace
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
    }

    if options.annotations {
        let method_name = raw
            .test_id
            .as_ref()
            .and_then(|id| definitions.get(id))
            .map_or(test_name, String::as_str);
        record.expected_result = annotate::expected_result(method_name).to_string();
        record.endpoint = annotate::endpoint(&record.class_name, method_name).to_string();
    }

    record.outcome = outcome;
    record
}
