//! Summarize Visual Studio TRX test results as an HTML report.
//!
//! [`extractor::parse`] turns a TRX document into a [`ResultSummary`]: counts,
//! a success rate over executed tests, and one [`TestOutcomeRecord`] per
//! passed or failed test, with failures classified into a short actual
//! result and reason. [`report`] renders and writes the HTML page.

pub mod config;
pub mod console;
pub mod error;
pub mod extractor;
pub mod models;
pub mod report;

pub use error::{ExtractError, InputError, ParseError, ReportError};
pub use extractor::{ExtractOptions, parse, parse_file, parse_with};
pub use models::{Outcome, ResultSummary, TestOutcomeRecord};
