mod discovery;
mod parser;
mod schema;

use crate::fs_scan;
use crate::traits::{Resolved, SessionStore, build_record};
use crosscheck_types::{Agent, Result, SessionRecord, SessionSummary, normalize_path};
use std::path::PathBuf;

/// Codex CLI sessions: event-stream JSONL under `~/.codex/sessions`, with
/// session metadata on the first line.
pub struct CodexStore {
    base_dir: PathBuf,
}

impl CodexStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn summaries(
        &self,
        cwd: Option<&str>,
        limit: usize,
        query: Option<&str>,
    ) -> Result<Vec<SessionSummary>> {
        let expected_cwd = cwd.map(normalize_path);
        let needle = query.map(str::to_lowercase);
        let mut out = Vec::new();

        for entry in discovery::candidates(&self.base_dir)? {
            if out.len() >= limit {
                break;
            }
            if let Some(expected) = &expected_cwd
                && discovery::session_cwd(&entry.path).as_ref() != Some(expected)
            {
                continue;
            }
            if let Some(needle) = &needle
                && !fs_scan::content_contains(&entry.path, needle)
            {
                continue;
            }

            let (session_id, raw_cwd) = discovery::header(&entry.path);
            out.push(SessionSummary {
                session_id: session_id
                    .unwrap_or_else(|| fs_scan::file_stem_string(&entry.path)),
                agent: Agent::Codex,
                cwd: raw_cwd,
                modified_at: fs_scan::mtime_rfc3339(&entry.path),
                file_path: entry.path.to_string_lossy().to_string(),
            });
        }

        Ok(out)
    }
}

impl SessionStore for CodexStore {
    fn agent(&self) -> Agent {
        Agent::Codex
    }

    fn resolve(&self, id: Option<&str>, cwd: &str, _chats_dir: Option<&str>) -> Result<Resolved> {
        discovery::resolve(&self.base_dir, id, cwd)
    }

    fn read(
        &self,
        id: Option<&str>,
        cwd: &str,
        chats_dir: Option<&str>,
        last_n: usize,
    ) -> Result<SessionRecord> {
        let resolved = self.resolve(id, cwd, chats_dir)?;
        let parsed = parser::parse_codex_file(&resolved.path, last_n)?;
        Ok(build_record(
            Agent::Codex,
            &resolved.path,
            parsed,
            resolved.warnings,
        ))
    }

    fn list(&self, cwd: Option<&str>, limit: usize) -> Result<Vec<SessionSummary>> {
        self.summaries(cwd, limit, None)
    }

    fn search(&self, query: &str, cwd: Option<&str>, limit: usize) -> Result<Vec<SessionSummary>> {
        self.summaries(cwd, limit, Some(query))
    }
}
