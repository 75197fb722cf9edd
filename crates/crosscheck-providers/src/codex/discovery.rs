use crate::fs_scan::{self, collect_matching_files, has_extension, path_contains};
use crate::traits::Resolved;
use crosscheck_types::{Error, Result, normalize_path};
use serde_json::Value;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Resolve the Codex session file for the given scope.
///
/// With an explicit id the newest path containing the substring wins. Without
/// one, candidates are scanned newest-first for an embedded cwd equal to the
/// normalized target; when none matches, the newest session is returned with
/// a fallback warning.
pub(crate) fn resolve(base_dir: &Path, id: Option<&str>, cwd: &str) -> Result<Resolved> {
    if !base_dir.exists() {
        return Err(Error::NotFound("No Codex session found.".to_string()));
    }

    if let Some(id_value) = id {
        let files = collect_matching_files(base_dir, true, &|p| {
            has_extension(p, "jsonl") && path_contains(p, id_value)
        })?;
        return files
            .first()
            .map(|f| Resolved {
                path: f.path.clone(),
                warnings: Vec::new(),
            })
            .ok_or_else(|| Error::NotFound("No Codex session found.".to_string()));
    }

    let files = collect_matching_files(base_dir, true, &|p| has_extension(p, "jsonl"))?;
    if files.is_empty() {
        return Err(Error::NotFound("No Codex session found.".to_string()));
    }

    let expected_cwd = normalize_path(cwd);
    for file in &files {
        if session_cwd(&file.path) == Some(expected_cwd.clone()) {
            return Ok(Resolved {
                path: file.path.clone(),
                warnings: Vec::new(),
            });
        }
    }

    Ok(Resolved {
        path: files[0].path.clone(),
        warnings: vec![format!(
            "Warning: no Codex session matched cwd {}; falling back to latest session.",
            expected_cwd.display()
        )],
    })
}

/// Embedded cwd from the first line's `session_meta` payload, normalized.
pub(crate) fn session_cwd(path: &Path) -> Option<PathBuf> {
    header(path).1.map(|cwd| normalize_path(&cwd))
}

/// Cheap header probe: session id and raw cwd from the first line only.
pub(crate) fn header(path: &Path) -> (Option<String>, Option<String>) {
    let Ok(file) = std::fs::File::open(path) else {
        return (None, None);
    };
    let mut reader = BufReader::new(file);
    let mut first = String::new();
    if reader.read_line(&mut first).is_err() {
        return (None, None);
    }
    let Ok(value) = serde_json::from_str::<Value>(first.trim_end()) else {
        return (None, None);
    };
    let id = value["payload"]["id"]
        .as_str()
        .or_else(|| value["payload"]["session_id"].as_str())
        .map(str::to_string);
    let cwd = value["payload"]["cwd"].as_str().map(str::to_string);
    (id, cwd)
}

/// All candidate session files, newest first.
pub(crate) fn candidates(base_dir: &Path) -> Result<Vec<fs_scan::FileEntry>> {
    collect_matching_files(base_dir, true, &|p| has_extension(p, "jsonl"))
}
