pub mod agent;
pub mod error;
pub mod record;
pub mod report;
mod util;

pub use agent::Agent;
pub use error::{Error, Result, classify_error};
pub use record::{SessionRecord, SessionSummary};
pub use report::{Finding, Report, ReportMode, Severity, SourceSpec, Verdict};
pub use util::*;
