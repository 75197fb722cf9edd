use crate::fs_scan;
use crate::transcript::{self, ParsedTranscript, Turn};
use crosscheck_types::Result;
use serde_json::Value;
use std::path::Path;

use super::schema::ClaudeLine;

/// Parse a Claude message JSONL file.
///
/// Assistant turns are lines whose `type` is `assistant` or whose nested
/// `message.role` is `assistant`; only their textual parts (`type == "text"`)
/// count, so tool-use-only turns contribute nothing. The first `sessionId`
/// and `cwd` seen anywhere in the file win.
pub(crate) fn parse_claude_file(path: &Path, last_n: usize) -> Result<ParsedTranscript> {
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

        let record = serde_json::from_value::<ClaudeLine>(value).unwrap_or_default();
        if session_id.is_none() {
            session_id = record.session_id.clone();
        }
        if cwd.is_none() {
            cwd = record.cwd.clone();
        }

        let role = match &record.message {
            Some(message) => message.role.as_deref(),
            None => record.role.as_deref(),
        };
        let assistant = record.kind.as_deref() == Some("assistant")
            || role.map(|r| r.eq_ignore_ascii_case("assistant")).unwrap_or(false);
        if !assistant {
            continue;
        }

        let content = match &record.message {
            Some(message) if !message.content.is_null() => &message.content,
            _ => &record.content,
        };
        let text = transcript::extract_text_parts_only(content);
        if !text.is_empty() {
            turns.push(Turn {
                assistant: true,
                text,
            });
        }
    }

    let (text, message_count, messages_returned) = match transcript::select_turns(&turns, last_n) {
        Some(selected) => selected,
        None => (
            transcript::raw_tail(
                &lines,
                "Could not extract assistant messages. Showing last 20 raw lines:",
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

#[cfg(test)]
mod tests {
    use super::*;

    fn write_lines(dir: &tempfile::TempDir, name: &str, lines: &[&str]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    #[test]
    fn assistant_text_parts_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(
            &dir,
            "s.jsonl",
            &[
                r#"{"type":"user","cwd":"/workspace/demo","sessionId":"sess-1","message":{"role":"user","content":"do the thing"}}"#,
                r#"{"type":"assistant","message":{"role":"assistant","content":[{"type":"text","text":"working on it"},{"type":"tool_use","name":"bash"}]}}"#,
            ],
        );

        let parsed = parse_claude_file(&path, 1).unwrap();
        assert_eq!(parsed.text, "working on it");
        assert_eq!(parsed.message_count, 1);
        assert_eq!(parsed.messages_returned, 1);
        assert_eq!(parsed.session_id.as_deref(), Some("sess-1"));
        assert_eq!(parsed.cwd.as_deref(), Some("/workspace/demo"));
    }

    #[test]
    fn last_n_assistant_turns_joined() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(
            &dir,
            "s.jsonl",
            &[
                r#"{"type":"assistant","message":{"role":"assistant","content":[{"type":"text","text":"one"}]}}"#,
                r#"{"type":"user","message":{"role":"user","content":"next"}}"#,
                r#"{"type":"assistant","message":{"role":"assistant","content":[{"type":"text","text":"two"}]}}"#,
                r#"{"type":"assistant","message":{"role":"assistant","content":[{"type":"text","text":"three"}]}}"#,
            ],
        );

        let parsed = parse_claude_file(&path, 2).unwrap();
        assert_eq!(parsed.text, "two\n---\nthree");
        assert_eq!(parsed.message_count, 3);
        assert_eq!(parsed.messages_returned, 2);
    }

    #[test]
    fn tool_use_only_turns_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(
            &dir,
            "s.jsonl",
            &[
                r#"{"type":"assistant","message":{"role":"assistant","content":[{"type":"tool_use","name":"bash"}]}}"#,
                r#"{"type":"assistant","message":{"role":"assistant","content":[{"type":"text","text":"done"}]}}"#,
            ],
        );

        let parsed = parse_claude_file(&path, 5).unwrap();
        assert_eq!(parsed.text, "done");
        assert_eq!(parsed.message_count, 1);
    }

    #[test]
    fn no_assistant_messages_fall_back_to_raw_tail() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(
            &dir,
            "s.jsonl",
            &[
                r#"{"type":"summary","summary":"A short session"}"#,
                r#"{"type":"user","message":{"role":"user","content":"hello"}}"#,
            ],
        );

        let parsed = parse_claude_file(&path, 1).unwrap();
        assert_eq!(parsed.message_count, 0);
        assert_eq!(parsed.messages_returned, 0);
        assert!(parsed.text.starts_with("Could not extract assistant messages."));
    }

    #[test]
    fn top_level_role_counts_when_message_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(
            &dir,
            "s.jsonl",
            &[r#"{"role":"assistant","content":[{"type":"text","text":"inline form"}]}"#],
        );

        let parsed = parse_claude_file(&path, 1).unwrap();
        assert_eq!(parsed.text, "inline form");
    }

    #[test]
    fn unparseable_lines_are_counted_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(
            &dir,
            "s.jsonl",
            &[
                "garbage",
                r#"{"type":"assistant","message":{"role":"assistant","content":[{"type":"text","text":"ok"}]}}"#,
            ],
        );

        let parsed = parse_claude_file(&path, 1).unwrap();
        assert_eq!(parsed.text, "ok");
        assert_eq!(parsed.skipped, 1);
    }
}
