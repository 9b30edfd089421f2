pub mod html;
pub mod theme;

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::ReportError;
use crate::models::ResultSummary;

pub use html::{HtmlReport, render_html};

const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `<prefix><YYYY-MM-DD_HH-MM-SS>.html`
pub fn report_file_name(prefix: &str, generated_at: NaiveDateTime) -> String {
    format!("{prefix}{}.html", generated_at.format(FILE_STAMP_FORMAT))
}

/// Write `contents` to `dir/file_name`, creating `dir` if needed.
pub fn write_report(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    write_atomic(&path, contents.as_bytes())?;
    info!(path = %path.display(), bytes = contents.len(), "wrote report");
    Ok(path)
}

/// Write the summary as pretty-printed JSON.
pub fn write_json(path: &Path, summary: &ResultSummary) -> Result<(), ReportError> {
    let json = serde_json::to_vec_pretty(summary)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_atomic(path, &json)?;
    info!(path = %path.display(), "wrote JSON summary");
    Ok(())
}

/// The bytes go to a temp file next to `path` which is then renamed over it,
/// so a failed write never leaves a partial file behind.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source: std::io::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tempfile::Builder::new()
        .prefix(".trx-report-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    file.persist(path).map_err(|e| ReportError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
