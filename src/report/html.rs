use std::fmt::{self, Display, Formatter};

use chrono::NaiveDateTime;

use crate::models::{Outcome, ResultSummary, TestOutcomeRecord};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Self-contained HTML page for one summary.
pub struct HtmlReport<'a> {
    pub title: &'a str,
    pub summary: &'a ResultSummary,
    pub generated_at: NaiveDateTime,
}

impl HtmlReport<'_> {
    fn write_head(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            f,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(f, "    <title>{}</title>", Escaped(self.title))?;
        writeln!(f, "    <style>")?;
        write_styles(f)?;
        writeln!(f, "    </style>")?;
        writeln!(f, "</head>")
    }

    fn write_tiles(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        writeln!(f, "        <div class=\"stats\">")?;
        write_tile(f, "passed", &s.passed_tests.to_string(), "Passed")?;
        write_tile(f, "failed", &s.failed_tests.to_string(), "Failed")?;
        write_tile(f, "total", &s.total_tests.to_string(), "Total")?;
        write_tile(
            f,
            "success-rate",
            &format!("{:.1}%", s.success_rate_percent),
            "Success Rate",
        )?;
        writeln!(f, "        </div>")
    }

    fn write_table(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "        <table class=\"test-table\">")?;
        writeln!(f, "            <thead>")?;
        writeln!(
            f,
            "                <tr><th>Status</th><th>Test Name</th><th>Class</th><th>Duration</th></tr>"
        )?;
        writeln!(f, "            </thead>")?;
        writeln!(f, "            <tbody>")?;
        for record in &self.summary.details {
            write_row(f, record)?;
        }
        writeln!(f, "            </tbody>")?;
        writeln!(f, "        </table>")
    }
}

impl Display for HtmlReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let generated = self.generated_at.format(DISPLAY_FORMAT);

        self.write_head(f)?;
        writeln!(f, "<body>")?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "        <div class=\"header\">")?;
        writeln!(f, "            <h1>{}</h1>", Escaped(self.title))?;
        writeln!(f, "            <p>Generated: {generated}</p>")?;
        writeln!(f, "        </div>")?;
        self.write_tiles(f)?;
        self.write_table(f)?;
        writeln!(f, "        <div class=\"footer\">")?;
        writeln!(
            f,
            "            <p>Report generated by {} | {generated}</p>",
            Escaped(self.title)
        )?;
        writeln!(f, "        </div>")?;
        writeln!(f, "    </div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

/// Render the summary as a complete HTML document.
pub fn render_html(title: &str, summary: &ResultSummary, generated_at: NaiveDateTime) -> String {
    HtmlReport {
        title,
        summary,
        generated_at,
    }
    .to_string()
}

fn write_tile(f: &mut Formatter<'_>, class: &str, value: &str, label: &str) -> fmt::Result {
    writeln!(f, "            <div class=\"stat-card {class}\">")?;
    writeln!(f, "                <div class=\"stat-number\">{value}</div>")?;
    writeln!(f, "                <div class=\"stat-label\">{label}</div>")?;
    writeln!(f, "            </div>")
}

fn write_row(f: &mut Formatter<'_>, record: &TestOutcomeRecord) -> fmt::Result {
    let failed = record.outcome == Outcome::Failed;
    let row_class = if failed { "failed-test-row" } else { "" };

    writeln!(f, "                <tr class=\"{row_class}\">")?;
    writeln!(
        f,
        "                    <td class=\"{}\">{} {}</td>",
        record.outcome.css_class(),
        record.outcome.icon(),
        Escaped(record.outcome.label())
    )?;
    writeln!(f, "                    <td>")?;
    writeln!(
        f,
        "                        <div><strong>{}</strong></div>",
        Escaped(&record.display_name)
    )?;

    if !record.endpoint.is_empty() || !record.expected_result.is_empty() {
        writeln!(f, "                        <div class=\"test-info\">")?;
        if !record.endpoint.is_empty() {
            writeln!(
                f,
                "                            <div><strong>Endpoint:</strong> {}</div>",
                Escaped(&record.endpoint)
            )?;
        }
        if !record.expected_result.is_empty() {
            writeln!(
                f,
                "                            <div><strong>Expected Result:</strong> {}</div>",
                Escaped(&record.expected_result)
            )?;
        }
        writeln!(f, "                        </div>")?;
    }

    if failed && (!record.actual_result.is_empty() || !record.failure_reason.is_empty()) {
        writeln!(f, "                        <div class=\"failure-info\">")?;
        if !record.actual_result.is_empty() {
            writeln!(
                f,
                "                            <div class=\"actual-result\"><strong>Actual Result:</strong> {}</div>",
                Escaped(&record.actual_result)
            )?;
        }
        if !record.failure_reason.is_empty() {
            writeln!(
                f,
                "                            <div class=\"failure-reason\"><strong>Failure Reason:</strong> {}</div>",
                Escaped(&record.failure_reason)
            )?;
        }
        if !record.stack_trace.is_empty() {
            writeln!(
                f,
                "                            <details><summary>Stack trace</summary><pre>{}</pre></details>",
                Escaped(&record.stack_trace)
            )?;
        }
        writeln!(f, "                        </div>")?;
    }

    writeln!(f, "                    </td>")?;
    writeln!(
        f,
        "                    <td>{}</td>",
        Escaped(&record.class_name)
    )?;
    writeln!(
        f,
        "                    <td><span class=\"duration\">{:.2}ms</span></td>",
        record.duration_ms
    )?;
    writeln!(f, "                </tr>")
}

fn write_styles(f: &mut Formatter<'_>) -> fmt::Result {
    use super::theme::*;

    writeln!(
        f,
        "        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 20px; background-color: {PAGE_BG}; }}"
    )?;
    writeln!(
        f,
        "        .container {{ max-width: 1400px; margin: 0 auto; background: white; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}"
    )?;
    writeln!(
        f,
        "        .header {{ background: {HEADER_GRADIENT}; color: white; padding: 30px; border-radius: 8px 8px 0 0; }}"
    )?;
    writeln!(f, "        .header h1 {{ margin: 0; font-size: 2.5em; }}")?;
    writeln!(f, "        .header p {{ margin: 10px 0 0 0; opacity: 0.9; }}")?;
    writeln!(
        f,
        "        .stats {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin: 20px; }}"
    )?;
    writeln!(
        f,
        "        .stat-card {{ background: {CARD_BG}; padding: 20px; border-radius: 8px; text-align: center; border-left: 4px solid {GREEN}; }}"
    )?;
    writeln!(
        f,
        "        .stat-card .stat-number {{ font-size: 2em; font-weight: bold; }}"
    )?;
    writeln!(f, "        .stat-card .stat-label {{ color: {SUBTEXT}; }}")?;
    writeln!(f, "        .passed .stat-number {{ color: {GREEN}; }}")?;
    writeln!(f, "        .failed .stat-number {{ color: {RED}; }}")?;
    writeln!(f, "        .total .stat-number {{ color: {BLUE}; }}")?;
    writeln!(f, "        .success-rate .stat-number {{ color: {MAUVE}; }}")?;
    writeln!(
        f,
        "        .test-table {{ width: 100%; border-collapse: collapse; margin: 20px 0; color: {TEXT}; }}"
    )?;
    writeln!(
        f,
        "        .test-table th, .test-table td {{ padding: 12px; text-align: left; border-bottom: 1px solid {BORDER}; }}"
    )?;
    writeln!(
        f,
        "        .test-table th {{ background: {BLUE}; color: white; font-weight: bold; }}"
    )?;
    writeln!(f, "        .status-passed {{ color: {GREEN}; font-weight: bold; }}")?;
    writeln!(
        f,
        "        .status-failed {{ color: {RED}; font-weight: bold; background-color: {RED_TINT}; padding: 5px; border-radius: 3px; }}"
    )?;
    writeln!(f, "        .status-skipped, .status-unknown {{ color: {SUBTEXT}; }}")?;
    writeln!(f, "        .failed-test-row {{ background-color: {RED_TINT}; }}")?;
    writeln!(
        f,
        "        .actual-result {{ color: {RED}; font-weight: bold; margin-top: 5px; }}"
    )?;
    writeln!(
        f,
        "        .failure-reason {{ color: {RED}; font-style: italic; margin-top: 3px; font-size: 0.9em; }}"
    )?;
    writeln!(
        f,
        "        .duration {{ font-family: monospace; background: {CARD_BG}; padding: 2px 6px; border-radius: 3px; }}"
    )?;
    writeln!(
        f,
        "        .test-info {{ margin-top: 10px; padding: 10px; background: {PANEL_BG}; border-radius: 4px; font-size: 0.9em; }}"
    )?;
    writeln!(
        f,
        "        .failure-info {{ margin-top: 10px; padding: 10px; background: {RED_TINT}; border: 1px solid {RED}; border-radius: 4px; font-size: 0.9em; }}"
    )?;
    writeln!(
        f,
        "        .footer {{ text-align: center; margin-top: 30px; padding-bottom: 20px; color: {SUBTEXT}; }}"
    )
}

/// Text escaped for HTML element content and quoted attribute values.
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..i])?;
            f.write_str(match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            })?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}
