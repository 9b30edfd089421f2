use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use trx_report::config::Config;
use trx_report::console::Console;
use trx_report::extractor::{self, ExtractOptions};
use trx_report::report;

/// Generate an HTML report with actual results and failure reasons from a TRX file.
#[derive(Debug, Parser)]
#[command(name = "trx-report", version)]
struct Args {
    /// TRX file, or a directory whose newest .trx is used
    #[arg(long)]
    trx: Option<PathBuf>,

    /// Output directory for the HTML report (created if missing)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Config file [default: ./trx-report.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the parsed summary as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the endpoint / expected-result annotations
    #[arg(long)]
    no_annotations: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init();

    let mut console = Console::stdout();
    match run(args, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            console.error(format!("{err:#}"));
            ExitCode::from(1)
        }
    }
}

fn run(args: Args, console: &mut Console<std::io::Stdout>) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_file(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::load(&cwd)
        }
    };

    let trx = args.trx.unwrap_or(config.input.trx);
    let output_dir = args.output.unwrap_or(config.report.output_dir);
    let options = ExtractOptions {
        annotations: config.annotations.enabled && !args.no_annotations,
    };

    console.plain("Generating enhanced HTML report with actual results...");

    let trx = extractor::resolve_input(&trx)?;
    info!(path = %trx.display(), "reading TRX");
    let summary = extractor::parse_file(&trx, &options).context("Error parsing TRX file")?;

    console.plain("Test Statistics:");
    console.plain(format!("   Total Tests: {}", summary.total_tests));
    console.plain(format!("   Passed: {}", summary.passed_tests));
    console.plain(format!("   Failed: {}", summary.failed_tests));
    console.plain(format!("   Skipped: {}", summary.skipped_tests));
    console.plain(format!("   Success Rate: {:.1}%", summary.success_rate_percent));

    let generated_at = chrono::Local::now().naive_local();
    let html = report::render_html(&config.report.title, &summary, generated_at);
    let file_name = report::report_file_name(&config.report.file_prefix, generated_at);
    let path = report::write_report(&output_dir, &file_name, &html)
        .context("Error writing HTML file")?;
    console.success(format!("HTML report generated: {}", path.display()));

    if let Some(json) = &args.json {
        report::write_json(json, &summary).context("Error writing JSON summary")?;
        console.success(format!("JSON summary written: {}", json.display()));
    }

    console.success("Enhanced HTML report with actual results generation completed!");
    Ok(())
}
