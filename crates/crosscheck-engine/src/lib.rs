pub mod handoff;
pub mod render;
pub mod report;

pub use handoff::{MAX_HANDOFF_SIZE, ReportRequest, load_handoff, parse_source_arg};
pub use render::report_to_markdown;
pub use report::build_report;
