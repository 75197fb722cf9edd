//! Lenient serde models for Gemini session JSON.
//!
//! Two document shapes exist in the wild: a `messages` array (newer CLI) and
//! a `history` array of role/parts turns (older checkpoints). Both fields are
//! optional here; the parser decides which branch applies.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeminiSession {
    #[serde(default, rename = "sessionId", alias = "session_id")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<GeminiMessage>>,
    #[serde(default)]
    pub history: Option<Vec<GeminiHistoryTurn>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeminiMessage {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub content: Value,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeminiHistoryTurn {
    #[serde(default)]
    pub role: Option<String>,
    /// Array of `{text}` parts, or a bare string.
    #[serde(default)]
    pub parts: Value,
}
