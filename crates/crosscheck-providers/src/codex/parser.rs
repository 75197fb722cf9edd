use crate::fs_scan;
use crate::transcript::{self, ParsedTranscript, Turn};
use crosscheck_types::Result;
use serde_json::Value;
use std::path::Path;

use super::schema::CodexLine;

/// Parse a Codex event-stream JSONL file.
///
/// Message-bearing lines are `response_item` records whose payload type is
/// `message`, and `event_msg` records carrying an `agent_message` (normalized
/// into a synthetic assistant turn). Unparseable lines are counted and
/// skipped, never fatal. The first `session_meta` wins for id and cwd.
pub(crate) fn parse_codex_file(path: &Path, last_n: usize) -> Result<ParsedTranscript> {
    let text = fs_scan::read_session_text(path)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    let mut turns: Vec<Turn> = Vec::new();
    let mut session_id: Option<String> = None;
    let mut cwd: Option<String> = None;
    let mut skipped = 0usize;

    for line in &lines {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        let record = serde_json::from_value::<CodexLine>(value).unwrap_or(CodexLine::Unknown);
        match record {
            CodexLine::SessionMeta { payload } => {
                if session_id.is_none() {
                    session_id = payload.id;
                }
                if cwd.is_none() {
                    cwd = payload.cwd;
                }
            }
            CodexLine::ResponseItem { payload } => {
                if payload.kind.as_deref() == Some("message") {
                    let assistant = payload
                        .role
                        .as_deref()
                        .map(|r| r.eq_ignore_ascii_case("assistant"))
                        .unwrap_or(false);
                    turns.push(Turn {
                        assistant,
                        text: transcript::extract_text(&payload.content),
                    });
                }
            }
            CodexLine::EventMsg { payload } => {
                if payload.kind.as_deref() == Some("agent_message") {
                    turns.push(Turn {
                        assistant: true,
                        text: payload.message.unwrap_or_default(),
                    });
                }
            }
            CodexLine::Unknown => {}
        }
    }

    let (text, message_count, messages_returned) = match transcript::select_turns(&turns, last_n) {
        Some(selected) => selected,
        None => (
            transcript::raw_tail(
                &lines,
                "Could not extract structured messages. Showing last 20 raw lines:",
            ),
            0,
            0,
        ),
    };

    Ok(ParsedTranscript {
        text,
        session_id,
        cwd,
        message_count,
        messages_returned,
        skipped,
    })
}
