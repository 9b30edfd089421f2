//! Error types for reading, parsing and writing reports.
//!
//! Per-record problems (bad durations, missing optional attributes, missing
//! diagnostic text) never surface here; they degrade to defaults inside the
//! extractor.

use std::io;
use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// The results file could not be located or read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("TRX file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no .trx files found in {}", dir.display())]
    NoTrxInDirectory { dir: PathBuf },
}

/// The document is not a well-formed TRX tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed XML at byte {position}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute at byte {position}")]
    Attribute {
        position: usize,
        #[source]
        source: AttrError,
    },

    #[error("document has no root element")]
    Empty,

    #[error("expected a TestRun root element, found `{found}`")]
    UnexpectedRoot { found: String },

    #[error("document ended inside `{element}`")]
    Unclosed { element: String },

    #[error("document is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Parsing a file combines both failure kinds.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The rendered report could not be written.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize summary")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to move report into place at {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
