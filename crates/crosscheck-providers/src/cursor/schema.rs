//! Lenient serde models for Cursor chat exports.
//!
//! Cursor files come in three shapes: a JSON document with a `messages`
//! array, a JSON document whose `content` is one scalar string, and JSONL
//! with one role/content object per line. The document-level union is
//! resolved once at parse entry; the JSONL shape is tried only when the
//! whole-document parse fails outright.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CursorDocument {
    Conversation { messages: Vec<CursorMessage> },
    Scalar { content: String },
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CursorMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Value,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CursorLine {
    #[serde(default)]
    pub role: Option<String>,
    /// JSONL lines only count when content is a plain string.
    #[serde(default)]
    pub content: Option<String>,
}
