use std::path::Path;
use std::process::{Command, Output};

const SAMPLE: &str = include_str!("fixtures/sample.trx");

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trx-report"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run trx-report")
}

fn html_reports(dir: &Path) -> Vec<std::path::PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "html"))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn generates_report_and_prints_statistics() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("run.trx"), SAMPLE).unwrap();

    let output = run(tmp.path(), &["--trx", "run.trx", "--output", "reports/html"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stdout: {stdout}");
    assert!(stdout.contains("   Total Tests: 5"));
    assert!(stdout.contains("   Passed: 3"));
    assert!(stdout.contains("   Failed: 1"));
    assert!(stdout.contains("   Skipped: 1"));
    assert!(stdout.contains("   Success Rate: 75.0%"));
    assert!(stdout.contains("SUCCESS: HTML report generated:"));

    let reports = html_reports(&tmp.path().join("reports/html"));
    assert_eq!(reports.len(), 1);
    let name = reports[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("EnhancedTestReport_WithActualResults_"));
    assert_eq!(name.len(), "EnhancedTestReport_WithActualResults_".len() + 19 + 5);

    let html = std::fs::read_to_string(&reports[0]).unwrap();
    assert!(html.contains("API endpoint not reachable - hostname not found"));
    assert!(html.contains("90500.00ms"));
    assert!(!html.contains("ShouldValidate Later"));
}

#[test]
fn directory_input_uses_newest_trx_and_writes_json() {
    let tmp = tempfile::tempdir().unwrap();
    let results = tmp.path().join("TestResults");
    std::fs::create_dir(&results).unwrap();
    std::fs::write(results.join("only.trx"), SAMPLE).unwrap();

    let output = run(
        tmp.path(),
        &["--trx", "TestResults", "--output", "out", "--json", "out/summary.json"],
    );
    assert!(output.status.success());

    let json = std::fs::read_to_string(tmp.path().join("out/summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["passedTests"], 3);
    assert_eq!(value["details"].as_array().unwrap().len(), 4);
}

#[test]
fn missing_trx_exits_with_error() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run(tmp.path(), &["--trx", "missing.trx", "--output", "out"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("ERROR: TRX file not found: missing.trx"));
    assert!(html_reports(&tmp.path().join("out")).is_empty());
}

#[test]
fn malformed_trx_exits_with_error() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("bad.trx"), "<TestRun><Results>").unwrap();

    let output = run(tmp.path(), &["--trx", "bad.trx", "--output", "out"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("ERROR: Error parsing TRX file"));
}

#[test]
fn unwritable_output_exits_with_error() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("run.trx"), SAMPLE).unwrap();
    std::fs::write(tmp.path().join("taken"), "not a directory").unwrap();

    let output = run(tmp.path(), &["--trx", "run.trx", "--output", "taken"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("ERROR: Error writing HTML file"));
}

#[test]
fn config_file_supplies_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("results")).unwrap();
    std::fs::write(tmp.path().join("results/nightly.trx"), SAMPLE).unwrap();
    std::fs::write(
        tmp.path().join("trx-report.toml"),
        "[input]\ntrx = \"results\"\n\n[report]\ntitle = \"Nightly API\"\nfile_prefix = \"Nightly_\"\noutput_dir = \"site\"\n",
    )
    .unwrap();

    let output = run(tmp.path(), &[]);
    assert!(output.status.success());

    let reports = html_reports(&tmp.path().join("site"));
    assert_eq!(reports.len(), 1);
    let name = reports[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("Nightly_"));
    let html = std::fs::read_to_string(&reports[0]).unwrap();
    assert!(html.contains("<title>Nightly API</title>"));
}
