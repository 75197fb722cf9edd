use crate::agent::Agent;
use crate::error::{Error, Result};
use serde::Serialize;

/// One requested input to the compare/report engine.
///
/// Exactly one of `session_id` / `current_session` identifies the session;
/// a spec with neither is invalid and must be rejected before resolution.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub agent: Agent,
    /// Substring matched against candidate file paths.
    pub session_id: Option<String>,
    pub current_session: bool,
    /// Per-source cwd override; falls back to the request-level cwd.
    pub cwd: Option<String>,
    /// Gemini-only explicit chats directory override.
    pub chats_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    Verify,
    Steer,
    Analyze,
    Feedback,
}

impl ReportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportMode::Verify => "verify",
            ReportMode::Steer => "steer",
            ReportMode::Analyze => "analyze",
            ReportMode::Feedback => "feedback",
        }
    }

    pub fn parse(value: &str) -> Result<ReportMode> {
        match value.to_ascii_lowercase().as_str() {
            "verify" => Ok(ReportMode::Verify),
            "steer" => Ok(ReportMode::Steer),
            "analyze" => Ok(ReportMode::Analyze),
            "feedback" => Ok(ReportMode::Feedback),
            other => Err(Error::UnsupportedMode(format!(
                "Unsupported mode: {}",
                other
            ))),
        }
    }
}

/// Finding severity. P0 is reserved: no current rule emits it, but the
/// ordering is part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    P0,
    P1,
    P2,
    P3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::P0 => "P0",
            Severity::P1 => "P1",
            Severity::P2 => "P2",
            Severity::P3 => "P3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "INCOMPLETE")]
    Incomplete,
    #[serde(rename = "STEERING_PLAN_READY")]
    SteeringPlanReady,
    #[serde(rename = "ANALYSIS_COMPLETE")]
    AnalysisComplete,
    #[serde(rename = "FEEDBACK_COMPLETE")]
    FeedbackComplete,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::Incomplete => "INCOMPLETE",
            Verdict::SteeringPlanReady => "STEERING_PLAN_READY",
            Verdict::AnalysisComplete => "ANALYSIS_COMPLETE",
            Verdict::FeedbackComplete => "FEEDBACK_COMPLETE",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub summary: String,
    /// Compact `[agent:shortid]` evidence tags. Presentational only; never
    /// used for equality elsewhere.
    pub evidence: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub mode: ReportMode,
    pub task: String,
    pub success_criteria: Vec<String>,
    /// `[agent:shortid] /resolved/source/path` per successfully read source.
    pub sources_used: Vec<String>,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub recommended_next_actions: Vec<String>,
    pub open_questions: Vec<String>,
}
