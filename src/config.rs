use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

pub const CONFIG_FILE: &str = "trx-report.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub annotations: AnnotationsConfig,
}

/// Where results are read from when `--trx` is not given.
#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// A `.trx` file, or a directory whose newest `.trx` is used.
    #[serde(default = "default_trx")]
    pub trx: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { trx: default_trx() }
    }
}

/// Naming and placement of the generated HTML.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Prepended to the `YYYY-MM-DD_HH-MM-SS` stamp in the file name.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            file_prefix: default_file_prefix(),
            output_dir: default_output_dir(),
        }
    }
}

/// Toggles the endpoint / expected-result name tables.
#[derive(Debug, Deserialize)]
pub struct AnnotationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for AnnotationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_trx() -> PathBuf {
    PathBuf::from("TestResults/TestResults.trx")
}

fn default_title() -> String {
    "API Test Report".to_string()
}

fn default_file_prefix() -> String {
    "EnhancedTestReport_WithActualResults_".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("TestReports")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load `trx-report.toml` from `dir`, falling back to defaults if absent or invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_file(&dir.join(CONFIG_FILE))
    }

    /// Load a specific config file, falling back to defaults if absent or invalid.
    pub fn load_file(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "ignoring invalid config");
            Self::default()
        })
    }
}
