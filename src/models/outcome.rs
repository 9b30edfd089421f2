use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal status of one executed test case, as reported by the `outcome`
/// attribute of a TRX `UnitTestResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
    /// Any label the runner produced that is not one of the three above
    /// (`NotExecuted`, `Inconclusive`, a missing attribute, ...).
    Other(String),
}

impl Outcome {
    /// Map a raw TRX label. Matching is case-sensitive, like the runner's output.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Passed" => Outcome::Passed,
            "Failed" => Outcome::Failed,
            "Skipped" => Outcome::Skipped,
            other => Outcome::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Outcome::Passed => "Passed",
            Outcome::Failed => "Failed",
            Outcome::Skipped => "Skipped",
            Outcome::Other(label) => label,
        }
    }

    /// HTML entity for the status column.
    pub fn icon(&self) -> &'static str {
        match self {
            Outcome::Passed => "&#10004;",
            Outcome::Failed => "&#10008;",
            Outcome::Skipped | Outcome::Other(_) => "&#9193;",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Outcome::Passed => "status-passed",
            Outcome::Failed => "status-failed",
            Outcome::Skipped => "status-skipped",
            Outcome::Other(_) => "status-unknown",
        }
    }

    pub fn is_executed(&self) -> bool {
        matches!(self, Outcome::Passed | Outcome::Failed)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Other("Unknown".to_string())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
