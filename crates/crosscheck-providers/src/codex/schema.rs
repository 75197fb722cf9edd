//! Lenient serde models for the Codex event-stream JSONL format.
//!
//! Every field is optional/defaulted so that only malformed JSON fails a
//! line; lines with unknown `type` tags deserialize to `Unknown` and are
//! ignored rather than counted as skips.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum CodexLine {
    SessionMeta {
        #[serde(default)]
        payload: SessionMetaPayload,
    },
    ResponseItem {
        #[serde(default)]
        payload: ResponseItemPayload,
    },
    EventMsg {
        #[serde(default)]
        payload: EventMsgPayload,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SessionMetaPayload {
    /// Session id; newer files use `id`, older ones `session_id`.
    #[serde(default, alias = "session_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub cwd: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponseItemPayload {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Plain string or a list of parts contributing `.text`.
    #[serde(default)]
    pub content: Value,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EventMsgPayload {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
