mod discovery;
mod parser;
mod schema;

use crate::fs_scan;
use crate::traits::{Resolved, SessionStore, build_record};
use crosscheck_types::{Agent, Result, SessionRecord, SessionSummary, hash_path, normalize_path};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Gemini CLI sessions: whole-document JSON under `~/.gemini/tmp`, one
/// hashed-cwd directory per project with a `chats/` subdirectory.
pub struct GeminiStore {
    base_dir: PathBuf,
}

impl GeminiStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn summaries(
        &self,
        cwd: Option<&str>,
        limit: usize,
        query: Option<&str>,
    ) -> Result<Vec<SessionSummary>> {
        // With a cwd filter only the hash-scoped directory qualifies; there
        // is no embedded cwd to check against.
        let entries = match cwd {
            Some(cwd) => {
                let scoped = self
                    .base_dir
                    .join(hash_path(&normalize_path(cwd)))
                    .join("chats");
                let mut files = crate::fs_scan::collect_matching_files(&scoped, false, &|p| {
                    fs_scan::has_extension(p, "json") && discovery::is_session_file(p)
                })?;
                fs_scan::sort_newest_first(&mut files);
                files
            }
            None => discovery::candidates(&self.base_dir, ".")?,
        };

        let needle = query.map(str::to_lowercase);
        let mut out = Vec::new();
        for entry in entries {
            if out.len() >= limit {
                break;
            }
            if let Some(needle) = &needle
                && !fs_scan::content_contains(&entry.path, needle)
            {
                continue;
            }

            out.push(SessionSummary {
                session_id: embedded_session_id(&entry.path)
                    .unwrap_or_else(|| fs_scan::file_stem_string(&entry.path)),
                agent: Agent::Gemini,
                cwd: None,
                modified_at: fs_scan::mtime_rfc3339(&entry.path),
                file_path: entry.path.to_string_lossy().to_string(),
            });
        }

        Ok(out)
    }
}

fn embedded_session_id(path: &Path) -> Option<String> {
    let text = std::fs::read_to_string(path).ok()?;
    let value: Value = serde_json::from_str(&text).ok()?;
    value["sessionId"].as_str().map(str::to_string)
}

impl SessionStore for GeminiStore {
    fn agent(&self) -> Agent {
        Agent::Gemini
    }

    fn resolve(&self, id: Option<&str>, cwd: &str, chats_dir: Option<&str>) -> Result<Resolved> {
        discovery::resolve(&self.base_dir, id, cwd, chats_dir)
    }

    fn read(
        &self,
        id: Option<&str>,
        cwd: &str,
        chats_dir: Option<&str>,
        last_n: usize,
    ) -> Result<SessionRecord> {
        let resolved = self.resolve(id, cwd, chats_dir)?;
        let parsed = parser::parse_gemini_file(&resolved.path, last_n)?;
        Ok(build_record(
            Agent::Gemini,
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
