//! Handoff file validation.
//!
//! A handoff is an untrusted JSON request object, so every field is checked
//! explicitly against a closed schema before any session file is touched.
//! Validation order is part of the contract: size, JSON shape, unknown
//! fields, mode, then the remaining fields in declaration order.

use crosscheck_types::{Agent, Error, ReportMode, Result, SourceSpec};
use serde_json::Value;
use std::path::Path;

/// Handoff files larger than this are rejected before parsing.
pub const MAX_HANDOFF_SIZE: u64 = 1024 * 1024;

const ALLOWED_FIELDS: [&str; 5] = ["mode", "task", "success_criteria", "sources", "constraints"];

/// Fully validated report request, ready for the report engine.
#[derive(Debug)]
pub struct ReportRequest {
    pub mode: ReportMode,
    pub task: String,
    pub success_criteria: Vec<String>,
    pub sources: Vec<SourceSpec>,
    pub constraints: Vec<String>,
    /// Collapse whitespace runs before comparing source contents.
    pub normalize: bool,
}

/// Parse a `<agent>[:session-substring]` source argument. A bare agent name
/// means "current session" for that agent.
pub fn parse_source_arg(raw: &str) -> Result<SourceSpec> {
    let mut parts = raw.splitn(2, ':');
    let agent = Agent::parse(parts.next().unwrap_or("").trim())?;
    let session_id = parts
        .next()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    Ok(SourceSpec {
        agent,
        current_session: session_id.is_none(),
        session_id,
        cwd: None,
        chats_dir: None,
    })
}

/// Load and validate a handoff file into a report request.
pub fn load_handoff(path: &Path) -> Result<ReportRequest> {
    let meta = std::fs::metadata(path).map_err(|_| {
        Error::InvalidHandoff(format!("Failed to read handoff file: {}", path.display()))
    })?;
    if meta.len() > MAX_HANDOFF_SIZE {
        return Err(Error::InvalidHandoff(
            "Invalid handoff: file exceeds 1MB size limit".to_string(),
        ));
    }

    let raw = std::fs::read_to_string(path).map_err(|_| {
        Error::InvalidHandoff(format!("Failed to read handoff file: {}", path.display()))
    })?;
    let root: Value = serde_json::from_str(&raw).map_err(|_| {
        Error::InvalidHandoff(format!("Failed to parse handoff JSON: {}", path.display()))
    })?;

    let Some(object) = root.as_object() else {
        return Err(Error::InvalidHandoff(
            "Invalid handoff: must be a JSON object".to_string(),
        ));
    };

    let extra: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|k| !ALLOWED_FIELDS.contains(k))
        .collect();
    if !extra.is_empty() {
        return Err(Error::InvalidHandoff(format!(
            "Invalid handoff: unexpected fields: {}",
            extra.join(", ")
        )));
    }

    let mode = root["mode"].as_str().ok_or_else(|| {
        Error::InvalidHandoff("Handoff is missing required string field: mode".to_string())
    })?;
    let mode = ReportMode::parse(mode)?;

    let task = root["task"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            Error::InvalidHandoff("Handoff is missing required string field: task".to_string())
        })?;
    if task.trim().is_empty() {
        return Err(Error::InvalidHandoff(
            "Handoff task must be a non-empty string".to_string(),
        ));
    }

    let success_criteria: Vec<String> = root["success_criteria"]
        .as_array()
        .ok_or_else(|| {
            Error::InvalidHandoff(
                "Handoff is missing required array field: success_criteria".to_string(),
            )
        })?
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();
    if success_criteria.is_empty() {
        return Err(Error::InvalidHandoff(
            "Handoff success_criteria must contain at least one string".to_string(),
        ));
    }

    let mut sources = Vec::new();
    for source in root["sources"].as_array().ok_or_else(|| {
        Error::InvalidHandoff("Handoff is missing required array field: sources".to_string())
    })? {
        let agent = source["agent"].as_str().ok_or_else(|| {
            Error::InvalidHandoff("Each source must include string field: agent".to_string())
        })?;
        let agent = Agent::parse(agent)?;

        let session_id = source
            .get("session_id")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let current_session = source
            .get("current_session")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if session_id.is_none() && !current_session {
            return Err(Error::InvalidHandoff(
                "Each source must provide session_id or set current_session=true".to_string(),
            ));
        }

        let cwd = source
            .get("cwd")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        sources.push(SourceSpec {
            agent,
            session_id,
            current_session,
            cwd,
            chats_dir: None,
        });
    }
    if sources.is_empty() {
        return Err(Error::InvalidHandoff(
            "Handoff sources must contain at least one source".to_string(),
        ));
    }

    let constraints = root
        .get("constraints")
        .and_then(|v| v.as_array())
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(ReportRequest {
        mode,
        task,
        success_criteria,
        sources,
        constraints,
        normalize: false,
    })
}
