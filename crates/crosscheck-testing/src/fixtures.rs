//! Canned session file bodies, one constructor per on-disk schema.
//!
//! Each helper returns the file content as a string; `TestWorld` decides
//! where it lands. Answers are plain text so tests can assert on them
//! verbatim after redaction (which leaves ordinary prose untouched).

use serde_json::json;

/// Codex event-stream JSONL: session_meta header plus one agent_message.
pub fn codex_session(id: &str, cwd: &str, answer: &str) -> String {
    let meta = json!({
        "type": "session_meta",
        "payload": {"id": id, "cwd": cwd}
    });
    let message = json!({
        "type": "event_msg",
        "payload": {"type": "agent_message", "message": answer}
    });
    format!("{}\n{}\n", meta, message)
}

/// Codex session with a user turn and several assistant turns, for last-N
/// windowing tests.
pub fn codex_session_multi(id: &str, cwd: &str, answers: &[&str]) -> String {
    let mut lines = vec![
        json!({
            "type": "session_meta",
            "payload": {"id": id, "cwd": cwd}
        })
        .to_string(),
        json!({
            "type": "response_item",
            "payload": {"type": "message", "role": "user", "content": "question"}
        })
        .to_string(),
    ];
    for answer in answers {
        lines.push(
            json!({
                "type": "event_msg",
                "payload": {"type": "agent_message", "message": answer}
            })
            .to_string(),
        );
    }
    lines.join("\n") + "\n"
}

/// Claude message JSONL: one user turn, one assistant turn with a text part.
pub fn claude_session(session_id: &str, cwd: &str, answer: &str) -> String {
    let user = json!({
        "type": "user",
        "sessionId": session_id,
        "cwd": cwd,
        "message": {"role": "user", "content": "question"}
    });
    let assistant = json!({
        "type": "assistant",
        "sessionId": session_id,
        "cwd": cwd,
        "message": {
            "role": "assistant",
            "content": [{"type": "text", "text": answer}]
        }
    });
    format!("{}\n{}\n", user, assistant)
}

/// Gemini `messages` schema document.
pub fn gemini_session(session_id: &str, answer: &str) -> String {
    json!({
        "sessionId": session_id,
        "messages": [
            {"type": "user", "content": "question"},
            {"type": "gemini", "content": answer}
        ]
    })
    .to_string()
}

/// Gemini `history` schema document.
pub fn gemini_history_session(answer: &str) -> String {
    json!({
        "history": [
            {"role": "user", "parts": [{"text": "question"}]},
            {"role": "model", "parts": [{"text": answer}]}
        ]
    })
    .to_string()
}

/// Cursor whole-document JSON with a messages array. The cwd is embedded in
/// the user turn so content-based cwd scoping can find it.
pub fn cursor_chat(cwd: &str, answer: &str) -> String {
    json!({
        "messages": [
            {"role": "user", "content": format!("question about {}", cwd)},
            {"role": "assistant", "content": answer}
        ]
    })
    .to_string()
}

/// Cursor JSONL variant.
pub fn cursor_chat_jsonl(answer: &str) -> String {
    let user = json!({"role": "user", "content": "question"});
    let assistant = json!({"role": "assistant", "content": answer});
    format!("{}\n{}\n", user, assistant)
}

/// Minimal valid handoff document.
pub fn handoff(mode: &str, sources: &[serde_json::Value]) -> String {
    json!({
        "mode": mode,
        "task": "Cross-check agent outputs",
        "success_criteria": ["outputs agree"],
        "sources": sources
    })
    .to_string()
}
