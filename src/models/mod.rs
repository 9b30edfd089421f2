pub mod outcome;
pub mod result;

pub use outcome::Outcome;
pub use result::{ResultSummary, SummaryCounters, TestOutcomeRecord};
