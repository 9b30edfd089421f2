const UNKNOWN_CLASS: &str = "Unknown";

/// Split a fully qualified `testName` into `(class_name, display_name)`.
///
/// The class is the segment before the last `.`; the display name is the last
/// segment with underscores turned into spaces. An empty class segment
/// (`".Method"`, `"A..B"`) stays empty; only a name without any `.` gets
/// `"Unknown"`.
pub fn split_test_name(test_name: &str) -> (String, String) {
    match test_name.rsplit_once('.') {
        Some((prefix, method)) => {
            let class = prefix.rsplit('.').next().unwrap_or_default();
            (class.to_string(), method.replace('_', " "))
        }
        None => (UNKNOWN_CLASS.to_string(), test_name.replace('_', " ")),
    }
}
