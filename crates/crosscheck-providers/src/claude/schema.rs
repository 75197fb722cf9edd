//! Lenient serde models for the Claude message JSONL format.
//!
//! Claude log lines are heterogeneous (user/assistant turns, tool results,
//! summaries); every field defaults so any JSON object deserializes and the
//! parser decides what counts as an assistant turn.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ClaudeLine {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default, rename = "sessionId", alias = "session_id")]
    pub session_id: Option<String>,
    /// Nested API message; some line shapes inline role/content instead.
    #[serde(default)]
    pub message: Option<ClaudeMessage>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Value,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ClaudeMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Value,
}
