use crate::fs_scan;
use crate::redact::redact;
use crate::transcript::ParsedTranscript;
use crosscheck_types::{Agent, Result, SessionRecord, SessionSummary};
use std::path::{Path, PathBuf};

/// Outcome of session resolution: the file to read plus any advisories
/// produced while choosing it (e.g. the cwd-scope fallback notice).
#[derive(Debug, Clone)]
pub struct Resolved {
    pub path: PathBuf,
    pub warnings: Vec<String>,
}

/// Per-agent capability bundle: resolve, read, list, search.
///
/// Four concrete implementations exist, one per supported agent family.
/// There is no shared base behavior beyond this contract; a "not found"
/// outcome is the `NotFound` error, never a sentinel value.
pub trait SessionStore: Send + Sync {
    fn agent(&self) -> Agent;

    /// Locate the session file for the given scope without parsing it.
    fn resolve(&self, id: Option<&str>, cwd: &str, chats_dir: Option<&str>) -> Result<Resolved>;

    /// Resolve and parse a session into the canonical record shape, with
    /// `last_n` trailing assistant turns in the content.
    fn read(
        &self,
        id: Option<&str>,
        cwd: &str,
        chats_dir: Option<&str>,
        last_n: usize,
    ) -> Result<SessionRecord>;

    /// Enumerate sessions newest-first, optionally scoped to a cwd.
    fn list(&self, cwd: Option<&str>, limit: usize) -> Result<Vec<SessionSummary>>;

    /// Enumerate sessions whose raw content contains `query`.
    fn search(&self, query: &str, cwd: Option<&str>, limit: usize) -> Result<Vec<SessionSummary>>;
}

/// Assemble the canonical record from a resolved path and parsed transcript.
/// Redaction and skip-count reporting happen here, once, so no parser can
/// forget either.
pub(crate) fn build_record(
    agent: Agent,
    path: &Path,
    parsed: ParsedTranscript,
    resolve_warnings: Vec<String>,
) -> SessionRecord {
    let mut warnings = resolve_warnings;
    if parsed.skipped > 0 {
        warnings.push(format!(
            "Warning: skipped {} unparseable line(s) in {}",
            parsed.skipped,
            path.display()
        ));
    }

    SessionRecord {
        agent,
        source: path.to_string_lossy().to_string(),
        content: redact(&parsed.text),
        session_id: parsed
            .session_id
            .unwrap_or_else(|| fs_scan::file_stem_string(path)),
        cwd: parsed.cwd,
        timestamp: fs_scan::mtime_rfc3339(path),
        message_count: parsed.message_count,
        messages_returned: parsed.messages_returned,
        warnings,
    }
}
