use crate::agent::Agent;
use serde::Serialize;

/// Canonical record produced by every session read, regardless of which
/// on-disk schema the bytes came from.
///
/// Invariant: `messages_returned <= message_count` unless `message_count == 0`
/// (raw-text fallback mode, where `messages_returned` is 0 by convention).
/// `content` is always redacted before the record is constructed.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub agent: Agent,
    /// Absolute path of the file the record was read from.
    pub source: String,
    /// Redacted transcript text; multiple turns are joined by `\n---\n`.
    pub content: String,
    /// Embedded session id when the format carries one, else the file stem.
    pub session_id: String,
    /// Working directory the session was recorded against, when embedded.
    pub cwd: Option<String>,
    /// File modification time, RFC 3339.
    pub timestamp: String,
    /// Assistant-equivalent turns found in the file.
    pub message_count: usize,
    /// Turns actually included in `content`.
    pub messages_returned: usize,
    /// Ordered human-readable advisories (parse skips, cwd fallback).
    pub warnings: Vec<String>,
}

/// Compact per-session metadata returned by list/search.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub agent: Agent,
    pub cwd: Option<String>,
    pub modified_at: String,
    pub file_path: String,
}
