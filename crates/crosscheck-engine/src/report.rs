//! Cross-agent report assembly.
//!
//! Reads each requested source through the provider registry (latest
//! assistant turn only), then derives findings, next actions, open questions
//! and the mode-dependent verdict. Failure to read a source is itself a
//! finding, never a fatal error: the report degrades instead of aborting.

use crate::handoff::ReportRequest;
use crosscheck_providers::Registry;
use crosscheck_types::{
    Finding, Report, ReportMode, SessionRecord, Severity, SourceSpec, Verdict, truncate_chars,
};
use std::collections::HashSet;

struct ReadSource {
    record: SessionRecord,
    evidence: String,
}

struct MissingSource {
    agent: &'static str,
    error: String,
    evidence: String,
}

pub fn build_report(registry: &Registry, request: &ReportRequest, default_cwd: &str) -> Report {
    let mut successful: Vec<ReadSource> = Vec::new();
    let mut missing: Vec<MissingSource> = Vec::new();

    for source in &request.sources {
        let evidence = evidence_tag(source);
        let cwd = source.cwd.as_deref().unwrap_or(default_cwd);
        let result = registry.store(source.agent).read(
            source.session_id.as_deref(),
            cwd,
            source.chats_dir.as_deref(),
            1,
        );
        match result {
            Ok(record) => successful.push(ReadSource { record, evidence }),
            Err(error) => missing.push(MissingSource {
                agent: source.agent.as_str(),
                error: error.to_string(),
                evidence,
            }),
        }
    }

    let mut findings: Vec<Finding> = Vec::new();

    for source in &missing {
        findings.push(Finding {
            severity: Severity::P1,
            summary: format!("Source unavailable: {} ({})", source.agent, source.error),
            evidence: vec![source.evidence.clone()],
            confidence: 0.9,
        });
    }

    for source in &successful {
        for warning in &source.record.warnings {
            findings.push(Finding {
                severity: Severity::P2,
                summary: format!("Source warning: {}", warning),
                evidence: vec![source.evidence.clone()],
                confidence: 0.75,
            });
        }
    }

    let unique_contents: HashSet<String> = successful
        .iter()
        .map(|source| {
            let text = source.record.content.trim().to_string();
            if request.normalize {
                normalize_content(&text)
            } else {
                text
            }
        })
        .collect();

    let all_evidence: Vec<String> = successful.iter().map(|s| s.evidence.clone()).collect();
    if successful.len() >= 2 {
        if unique_contents.len() > 1 {
            findings.push(Finding {
                severity: Severity::P1,
                summary: "Divergent agent outputs detected".to_string(),
                evidence: all_evidence,
                confidence: 0.75,
            });
        } else {
            findings.push(Finding {
                severity: Severity::P3,
                summary: "All available agent outputs are aligned".to_string(),
                evidence: all_evidence,
                confidence: 0.9,
            });
        }
    } else {
        findings.push(Finding {
            severity: Severity::P2,
            summary: "Insufficient comparable sources".to_string(),
            evidence: all_evidence,
            confidence: 0.5,
        });
    }

    let mut recommended_next_actions = Vec::new();
    if !missing.is_empty() {
        recommended_next_actions.push(
            "Provide valid session identifiers or cwd values for unavailable sources.".to_string(),
        );
    }
    if unique_contents.len() > 1 {
        recommended_next_actions.push(
            "Inspect full transcripts for diverging sources before final decisions.".to_string(),
        );
    }
    if !request.constraints.is_empty() {
        recommended_next_actions.push(format!(
            "Verify recommendations against constraints: {}.",
            request.constraints.join("; ")
        ));
    }
    if recommended_next_actions.is_empty() {
        recommended_next_actions.push("No immediate action required.".to_string());
    }

    let open_questions = missing
        .iter()
        .map(|source| format!("Missing source {}: {}", source.agent, source.error))
        .collect();

    let verdict = compute_verdict(
        request.mode,
        missing.is_empty(),
        unique_contents.len(),
        successful.len(),
    );

    Report {
        mode: request.mode,
        task: request.task.clone(),
        success_criteria: request.success_criteria.clone(),
        sources_used: successful
            .iter()
            .map(|source| format!("{} {}", source.evidence, source.record.source))
            .collect(),
        verdict,
        findings,
        recommended_next_actions,
        open_questions,
    }
}

/// Collapse every whitespace run (including newlines) to one space.
pub fn normalize_content(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Compact `[agent:shortid]` label used in evidence and sources_used lines.
fn evidence_tag(source: &SourceSpec) -> String {
    let id = source
        .session_id
        .as_deref()
        .map(|value| truncate_chars(value, 8))
        .unwrap_or_else(|| {
            if source.current_session {
                "latest".to_string()
            } else {
                "unspecified".to_string()
            }
        });
    format!("[{}:{}]", source.agent.as_str(), id)
}

fn compute_verdict(
    mode: ReportMode,
    no_missing: bool,
    unique_contents: usize,
    success_count: usize,
) -> Verdict {
    if success_count == 0 {
        return Verdict::Incomplete;
    }

    match mode {
        ReportMode::Verify => {
            if no_missing && unique_contents <= 1 {
                Verdict::Pass
            } else {
                Verdict::Fail
            }
        }
        ReportMode::Steer => Verdict::SteeringPlanReady,
        ReportMode::Analyze => Verdict::AnalysisComplete,
        ReportMode::Feedback => Verdict::FeedbackComplete,
    }
}
