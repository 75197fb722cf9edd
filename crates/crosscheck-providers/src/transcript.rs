//! Format-independent transcript assembly: turn selection, last-N windowing,
//! and the raw-tail fallback used when a file yields no structured messages.

use crate::limits::{RAW_TAIL_LINES, TURN_SEPARATOR};
use serde_json::Value;

/// One extracted message-bearing entry, in original file order.
#[derive(Debug, Clone)]
pub(crate) struct Turn {
    pub assistant: bool,
    pub text: String,
}

/// Parser output before redaction and record assembly.
///
/// The skip count is a field, not a pre-formatted warning, so record
/// assembly can guarantee it gets reported; a parser cannot forget.
#[derive(Debug)]
pub(crate) struct ParsedTranscript {
    /// Un-redacted joined text of the selected turns (or fallback raw tail).
    pub text: String,
    pub session_id: Option<String>,
    pub cwd: Option<String>,
    pub message_count: usize,
    pub messages_returned: usize,
    /// Lines that failed JSON parsing and were recovered past.
    pub skipped: usize,
}

/// Apply the uniform last-N selection rule over extracted turns.
///
/// Returns `None` when there is nothing to select (the caller falls back to
/// the raw tail or reports an empty session). When no assistant-equivalent
/// turn exists but other messages do, the candidate set degrades to all
/// messages and the single most recent one is returned; `message_count` then
/// reflects the degraded set so the record invariant holds.
pub(crate) fn select_turns(turns: &[Turn], last_n: usize) -> Option<(String, usize, usize)> {
    let assistant: Vec<&Turn> = turns.iter().filter(|t| t.assistant).collect();

    if !assistant.is_empty() {
        let count = assistant.len();
        if last_n > 1 {
            let take = last_n.min(count);
            let window = &assistant[count - take..];
            let text = window
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<&str>>()
                .join(TURN_SEPARATOR);
            return Some((or_no_content(text), count, take));
        }
        let last = assistant[count - 1];
        return Some((or_no_content(last.text.clone()), count, 1));
    }

    if let Some(last) = turns.last() {
        return Some((or_no_content(last.text.clone()), turns.len(), 1));
    }

    None
}

fn or_no_content(text: String) -> String {
    if text.is_empty() {
        "[No text content]".to_string()
    } else {
        text
    }
}

/// Debug-convenience fallback when zero structured messages were extracted.
/// Only the zeroed `message_count`/`messages_returned` signal is contractual.
pub(crate) fn raw_tail(lines: &[String], heading: &str) -> String {
    let start = lines.len().saturating_sub(RAW_TAIL_LINES);
    format!("{}\n{}", heading, lines[start..].join("\n"))
}

/// Extract display text from a content value that is either a plain string or
/// a list of parts, each contributing `.text` (or itself, when a string).
pub(crate) fn extract_text(value: &Value) -> String {
    if let Some(raw) = value.as_str() {
        return raw.to_string();
    }

    if let Some(parts) = value.as_array() {
        return parts
            .iter()
            .map(|part| {
                if let Some(raw) = part.as_str() {
                    raw.to_string()
                } else {
                    part["text"].as_str().unwrap_or("").to_string()
                }
            })
            .collect::<Vec<String>>()
            .join("");
    }

    String::new()
}

/// Extract display text keeping only parts whose own `type` is `"text"`.
/// Tool-call and attachment parts are dropped from display text.
pub(crate) fn extract_text_parts_only(value: &Value) -> String {
    if let Some(raw) = value.as_str() {
        return raw.to_string();
    }

    if let Some(parts) = value.as_array() {
        return parts
            .iter()
            .filter_map(|part| {
                if part["type"].as_str().unwrap_or("") == "text" {
                    Some(part["text"].as_str().unwrap_or(""))
                } else {
                    None
                }
            })
            .collect::<Vec<&str>>()
            .join("");
    }

    String::new()
}
