//! Failure classification for failed test results.
//!
//! Diagnostic text is matched against an ordered rule list, first match wins.
//! Each rule requires all of its signal substrings (case-sensitive) and yields
//! a fixed `(actual_result, failure_reason)` pair.

const MAX_REASON_CHARS: usize = 100;
const ELLIPSIS: &str = "...";

pub const GENERIC_ACTUAL: &str = "Test execution failed";
pub const GENERIC_REASON: &str = "Test failed without specific error details";

/// The pair attached to a failed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub actual_result: String,
    pub failure_reason: String,
}

impl Classification {
    fn new(actual: &str, reason: impl Into<String>) -> Self {
        Self {
            actual_result: actual.to_string(),
            failure_reason: reason.into(),
        }
    }

    pub fn generic() -> Self {
        Self::new(GENERIC_ACTUAL, GENERIC_REASON)
    }
}

struct Rule {
    signals: &'static [&'static str],
    actual_result: &'static str,
    failure_reason: &'static str,
}

impl Rule {
    fn matches(&self, text: &str) -> bool {
        self.signals.iter().all(|signal| text.contains(signal))
    }
}

const RULES: &[Rule] = &[
    Rule {
        signals: &["InvalidOperationException", "Network connectivity required"],
        actual_result: "Network connectivity issue",
        failure_reason: "POST operations require network connectivity - API endpoint not reachable",
    },
    Rule {
        signals: &["HttpRequestException", "nodename nor servname provided"],
        actual_result: "Network connectivity issue",
        failure_reason: "API endpoint not reachable - DNS resolution failed",
    },
    Rule {
        signals: &["HttpRequestException", "Name or service not known"],
        actual_result: "Network connectivity issue",
        failure_reason: "API endpoint not reachable - hostname not found",
    },
    Rule {
        signals: &["HttpRequestException"],
        actual_result: "HTTP request failed",
        failure_reason: "Network connectivity issue",
    },
    Rule {
        signals: &["TaskCanceledException"],
        actual_result: "Request timeout",
        failure_reason: "API endpoint timeout - server not responding",
    },
    Rule {
        signals: &["TimeoutException"],
        actual_result: "Request timeout",
        failure_reason: "Request timed out",
    },
    Rule {
        signals: &["Assertion"],
        actual_result: "Assertion failed",
        failure_reason: "Test assertion did not pass",
    },
];

/// Classify a failure from its error-info message and standard output.
///
/// The error-info message is tried first in full; standard output is only
/// consulted when the message yields nothing. With neither, the generic pair
/// is returned.
pub fn classify_failure(error_message: Option<&str>, std_out: Option<&str>) -> Classification {
    [error_message, std_out]
        .into_iter()
        .flatten()
        .filter(|text| !text.is_empty())
        .find_map(classify_text)
        .unwrap_or_else(Classification::generic)
}

/// Run the rule list over one block of text.
pub fn classify_text(text: &str) -> Option<Classification> {
    if let Some(rule) = RULES.iter().find(|rule| rule.matches(text)) {
        return Some(Classification::new(rule.actual_result, rule.failure_reason));
    }
    first_meaningful_line(text).map(|line| Classification::new(GENERIC_ACTUAL, truncate(line)))
}

/// First non-blank line that is not a `Test:`/`Description:` banner.
fn first_meaningful_line(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("Test:") && !line.starts_with("Description:"))
}

/// Cut to at most 100 characters, marking the cut with an ellipsis.
pub fn truncate(line: &str) -> String {
    match line.char_indices().nth(MAX_REASON_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &line[..cut]),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(
        "System.InvalidOperationException: Network connectivity required for POST",
        "Network connectivity issue",
        "POST operations require network connectivity - API endpoint not reachable";
        "post without network"
    )]
    #[test_case(
        "System.Net.Http.HttpRequestException: nodename nor servname provided, or not known",
        "Network connectivity issue",
        "API endpoint not reachable - DNS resolution failed";
        "dns failure"
    )]
    #[test_case(
        "System.Net.Http.HttpRequestException: Name or service not known (api.example:443)",
        "Network connectivity issue",
        "API endpoint not reachable - hostname not found";
        "unknown host"
    )]
    #[test_case(
        "System.Net.Http.HttpRequestException: Connection refused",
        "HTTP request failed",
        "Network connectivity issue";
        "generic http"
    )]
    #[test_case(
        "System.Threading.Tasks.TaskCanceledException: A task was canceled.",
        "Request timeout",
        "API endpoint timeout - server not responding";
        "task canceled"
    )]
    #[test_case(
        "System.TimeoutException: The operation has timed out.",
        "Request timeout",
        "Request timed out";
        "timeout"
    )]
    #[test_case(
        "NUnit.Framework.AssertionException: Expected: 200 But was: 500",
        "Assertion failed",
        "Test assertion did not pass";
        "assertion"
    )]
    fn rules_map_signals_to_pairs(text: &str, actual: &str, reason: &str) {
        let c = classify_text(text).unwrap();
        assert_eq!(c.actual_result, actual);
        assert_eq!(c.failure_reason, reason);
    }

    #[test]
    fn dns_rule_wins_over_generic_http() {
        let c = classify_text("HttpRequestException ... nodename nor servname provided").unwrap();
        assert_eq!(c.failure_reason, "API endpoint not reachable - DNS resolution failed");
    }

    #[test]
    fn invalid_operation_needs_both_signals() {
        let c = classify_text("InvalidOperationException: Sequence contains no elements").unwrap();
        assert_eq!(c.actual_result, GENERIC_ACTUAL);
        assert_eq!(c.failure_reason, "InvalidOperationException: Sequence contains no elements");
    }

    #[test]
    fn signals_are_case_sensitive() {
        let c = classify_text("httprequestexception happened").unwrap();
        assert_eq!(c.actual_result, GENERIC_ACTUAL);
    }

    #[test]
    fn fallback_skips_banner_and_blank_lines() {
        let text = "\n  Test: Create appointment\nDescription: books a slot\n\n   Expected status 201 got 409  \nmore";
        let c = classify_text(text).unwrap();
        assert_eq!(c.actual_result, GENERIC_ACTUAL);
        assert_eq!(c.failure_reason, "Expected status 201 got 409");
    }

    #[test]
    fn banner_only_text_yields_nothing() {
        assert_eq!(classify_text("Test: x\nDescription: y\n   \n"), None);
    }

    #[test]
    fn long_lines_are_truncated_with_ellipsis() {
        let line = "x".repeat(150);
        let reason = truncate(&line);
        assert_eq!(reason, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn lines_at_the_limit_pass_through() {
        let line = "y".repeat(100);
        assert_eq!(truncate(&line), line);
        assert_eq!(truncate("short"), "short");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let line = "é".repeat(101);
        assert_eq!(truncate(&line), format!("{}...", "é".repeat(100)));
    }

    #[test]
    fn error_message_takes_priority_over_stdout() {
        let c = classify_failure(Some("TimeoutException"), Some("HttpRequestException"));
        assert_eq!(c.failure_reason, "Request timed out");
    }

    #[test]
    fn stdout_is_used_when_message_yields_nothing() {
        let c = classify_failure(Some("Test: only a banner"), Some("TaskCanceledException"));
        assert_eq!(c.actual_result, "Request timeout");
        assert_eq!(c.failure_reason, "API endpoint timeout - server not responding");
    }

    #[test]
    fn stdout_gets_the_full_rule_list() {
        let c = classify_failure(
            None,
            Some("InvalidOperationException: Network connectivity required"),
        );
        assert_eq!(
            c.failure_reason,
            "POST operations require network connectivity - API endpoint not reachable"
        );
    }

    #[test]
    fn missing_text_is_generic() {
        assert_eq!(classify_failure(None, None), Classification::generic());
        assert_eq!(classify_failure(Some(""), Some("")), Classification::generic());
    }
}
