//! Markdown rendering for reports, for pasting into PRs and issue threads.

use crosscheck_types::Report;

pub fn report_to_markdown(report: &Report) -> String {
    let mut lines = Vec::new();
    lines.push("### Crosscheck Report".to_string());
    lines.push(String::new());
    lines.push(format!("**Mode:** {}", report.mode.as_str()));
    lines.push(format!("**Task:** {}", report.task));
    lines.push("**Success Criteria:**".to_string());
    for criterion in &report.success_criteria {
        lines.push(format!("- {}", criterion));
    }

    lines.push(String::new());
    lines.push("**Sources Used:**".to_string());
    for source in &report.sources_used {
        lines.push(format!("- {}", source));
    }

    lines.push(String::new());
    lines.push(format!("**Verdict:** {}", report.verdict.as_str()));
    lines.push(String::new());
    lines.push("**Findings:**".to_string());
    for finding in &report.findings {
        lines.push(format!(
            "- **{}:** {} (evidence: {}; confidence: {:.2})",
            finding.severity.as_str(),
            finding.summary,
            finding.evidence.join(", "),
            finding.confidence
        ));
    }

    lines.push(String::new());
    lines.push("**Recommended Next Actions:**".to_string());
    for (index, action) in report.recommended_next_actions.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, action));
    }

    if !report.open_questions.is_empty() {
        lines.push(String::new());
        lines.push("**Open Questions:**".to_string());
        for question in &report.open_questions {
            lines.push(format!("- {}", question));
        }
    }

    lines.join("\n")
}
