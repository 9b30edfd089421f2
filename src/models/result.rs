use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

/// One row of the report: an executed, non-skipped test case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcomeRecord {
    pub display_name: String,
    pub fully_qualified_name: String,
    pub class_name: String,
    pub outcome: Outcome,
    pub duration_ms: f64,
    pub start_time: String,
    pub expected_result: String,
    pub endpoint: String,
    /// Only set for failed tests.
    pub actual_result: String,
    /// Only set for failed tests.
    pub failure_reason: String,
    pub stack_trace: String,
}

/// Aggregate produced by one parse of a results document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub skipped_tests: usize,
    pub success_rate_percent: f64,
    /// Document order, skipped tests excluded.
    pub details: Vec<TestOutcomeRecord>,
}

impl ResultSummary {
    /// Results whose outcome label was none of Passed/Failed/Skipped.
    pub fn other_tests(&self) -> usize {
        self.total_tests - self.passed_tests - self.failed_tests - self.skipped_tests
    }
}

/// Running tally kept while walking result nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryCounters {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl SummaryCounters {
    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Other(_) => {}
        }
    }

    /// `passed / (passed + failed) * 100` rounded to one decimal (ties to even),
    /// 0 when nothing executed.
    pub fn success_rate(&self) -> f64 {
        let executed = self.passed + self.failed;
        if executed == 0 {
            return 0.0;
        }
        let rate = self.passed as f64 / executed as f64 * 100.0;
        (rate * 10.0).round_ties_even() / 10.0
    }

    pub fn into_summary(self, details: Vec<TestOutcomeRecord>) -> ResultSummary {
        ResultSummary {
            total_tests: self.total,
            passed_tests: self.passed,
            failed_tests: self.failed,
            skipped_tests: self.skipped,
            success_rate_percent: self.success_rate(),
            details,
        }
    }
}
