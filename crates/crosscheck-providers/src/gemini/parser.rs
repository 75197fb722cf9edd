use crate::fs_scan;
use crate::transcript::{self, ParsedTranscript, Turn};
use crosscheck_types::{Error, Result};
use serde_json::Value;
use std::path::Path;

use super::schema::GeminiSession;

/// Parse a Gemini session JSON document (whole-file JSON, not JSONL).
///
/// The `messages` branch treats `gemini`/`assistant`/`model` types as
/// assistant turns; the `history` branch treats every non-`user` role as
/// assistant. A document with neither field is an unknown schema, and an
/// empty array is reported as an empty session rather than a raw tail: the
/// file parsed fine, it just has nothing in it.
pub(crate) fn parse_gemini_file(path: &Path, last_n: usize) -> Result<ParsedTranscript> {
    let text = fs_scan::read_session_text(path)?;
    let session: GeminiSession = serde_json::from_str(&text)
        .map_err(|e| Error::ParseFailed(format!("Failed to parse Gemini JSON: {}", e)))?;

    let turns: Vec<Turn> = if let Some(messages) = &session.messages {
        if messages.is_empty() {
            return Err(Error::EmptySession("Gemini session has no messages.".to_string()));
        }
        messages
            .iter()
            .map(|message| Turn {
                assistant: message
                    .kind
                    .as_deref()
                    .map(|t| {
                        let lower = t.to_ascii_lowercase();
                        lower == "gemini" || lower == "assistant" || lower == "model"
                    })
                    .unwrap_or(false),
                text: transcript::extract_text(&message.content),
            })
            .collect()
    } else if let Some(history) = &session.history {
        if history.is_empty() {
            return Err(Error::EmptySession("Gemini history is empty.".to_string()));
        }
        history
            .iter()
            .map(|turn| Turn {
                assistant: !turn
                    .role
                    .as_deref()
                    .map(|role| role.eq_ignore_ascii_case("user"))
                    .unwrap_or(false),
                text: history_parts_text(&turn.parts),
            })
            .collect()
    } else {
        return Err(Error::ParseFailed(
            "Unknown Gemini session schema. Supported fields: messages, history.".to_string(),
        ));
    };

    // Arrays were non-empty, so selection always yields something.
    let (text, message_count, messages_returned) =
        transcript::select_turns(&turns, last_n).unwrap_or((String::new(), 0, 0));

    Ok(ParsedTranscript {
        text,
        session_id: session.session_id,
        cwd: None,
        message_count,
        messages_returned,
        skipped: 0,
    })
}

fn history_parts_text(parts: &Value) -> String {
    if let Some(arr) = parts.as_array() {
        arr.iter()
            .map(|part| part["text"].as_str().unwrap_or(""))
            .collect::<Vec<&str>>()
            .join("\n")
    } else if let Some(raw) = parts.as_str() {
        raw.to_string()
    } else {
        String::new()
    }
}
