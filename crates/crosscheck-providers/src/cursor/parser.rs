use crate::fs_scan;
use crate::transcript::{self, ParsedTranscript, Turn};
use crosscheck_types::Result;
use serde_json::Value;
use std::path::Path;

use super::schema::{CursorDocument, CursorLine};

const RAW_TAIL_HEADING: &str =
    "Could not extract structured messages. Showing last 20 raw lines:";

/// Parse a Cursor chat file, most-structured interpretation first.
///
/// Whole-document JSON wins when it matches a known shape (`messages` array
/// or scalar `content`); a document that fails JSON parsing entirely is
/// retried as JSONL. Anything else degrades to the raw tail. Cursor files
/// carry no session id or cwd metadata.
pub(crate) fn parse_cursor_file(path: &Path, last_n: usize) -> Result<ParsedTranscript> {
    let text = fs_scan::read_session_text(path)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    match serde_json::from_str::<Value>(&text) {
        Ok(document) => {
            let turns = match serde_json::from_value::<CursorDocument>(document) {
                Ok(CursorDocument::Conversation { messages }) => messages
                    .iter()
                    .filter(|m| {
                        m.role
                            .as_deref()
                            .map(|r| r.eq_ignore_ascii_case("assistant"))
                            .unwrap_or(false)
                    })
                    .map(|m| Turn {
                        assistant: true,
                        text: transcript::extract_text(&m.content),
                    })
                    .collect(),
                Ok(CursorDocument::Scalar { content }) => vec![Turn {
                    assistant: true,
                    text: content,
                }],
                Err(_) => Vec::new(),
            };
            Ok(finish(turns, &lines, 0, last_n))
        }
        Err(_) => {
            let mut turns = Vec::new();
            let mut skipped = 0usize;
            for line in &lines {
                let value: Value = match serde_json::from_str(line) {
                    Ok(v) => v,
                    Err(_) => {
                        skipped += 1;
                        continue;
                    }
                };
                if let Ok(record) = serde_json::from_value::<CursorLine>(value)
                    && record
                        .role
                        .as_deref()
                        .map(|r| r.eq_ignore_ascii_case("assistant"))
                        .unwrap_or(false)
                    && let Some(content) = record.content
                {
                    turns.push(Turn {
                        assistant: true,
                        text: content,
                    });
                }
            }

            // A fully unstructured file reports via the raw tail, not a
            // per-line skip count.
            if turns.is_empty() {
                skipped = 0;
            }
            Ok(finish(turns, &lines, skipped, last_n))
        }
    }
}

fn finish(turns: Vec<Turn>, lines: &[String], skipped: usize, last_n: usize) -> ParsedTranscript {
    let (text, message_count, messages_returned) = match transcript::select_turns(&turns, last_n) {
        Some(selected) => selected,
        None => (transcript::raw_tail(lines, RAW_TAIL_HEADING), 0, 0),
    };

    ParsedTranscript {
        text,
        session_id: None,
        cwd: None,
        message_count,
        messages_returned,
        skipped,
    }
}
