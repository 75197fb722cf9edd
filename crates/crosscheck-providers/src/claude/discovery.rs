use crate::fs_scan::{self, collect_matching_files, has_extension, path_contains};
use crate::traits::Resolved;
use crosscheck_types::{Error, Result, normalize_path};
use serde_json::Value;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Resolve a Claude session file under the projects directory.
///
/// Claude stores logs per-project (`~/.claude/projects/<munged-cwd>/*.jsonl`)
/// but the munging is not reliably reversible, so cwd scoping reads the `cwd`
/// field embedded in the log lines instead of trusting directory names.
pub(crate) fn resolve(base_dir: &Path, id: Option<&str>, cwd: &str) -> Result<Resolved> {
    if !base_dir.exists() {
        return Err(Error::NotFound(format!(
            "Claude projects directory not found: {}",
            base_dir.display()
        )));
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
            .ok_or_else(|| Error::NotFound("No Claude session found.".to_string()));
    }

    let files = collect_matching_files(base_dir, true, &|p| has_extension(p, "jsonl"))?;
    if files.is_empty() {
        return Err(Error::NotFound("No Claude session found.".to_string()));
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
            "Warning: no Claude session matched cwd {}; falling back to latest session.",
            expected_cwd.display()
        )],
    })
}

/// Embedded cwd: first `cwd` field found anywhere in the file, normalized.
/// Claude puts it on most lines but not necessarily the first.
pub(crate) fn session_cwd(path: &Path) -> Option<PathBuf> {
    scan_fields(path).1.map(|cwd| normalize_path(&cwd))
}

/// First `sessionId` and raw `cwd` values in the file.
pub(crate) fn header(path: &Path) -> (Option<String>, Option<String>) {
    scan_fields(path)
}

fn scan_fields(path: &Path) -> (Option<String>, Option<String>) {
    let Ok(file) = std::fs::File::open(path) else {
        return (None, None);
    };
    let reader = BufReader::new(file);
    let mut session_id: Option<String> = None;
    let mut cwd: Option<String> = None;

    for line in reader.lines() {
        let Ok(line) = line else { break };
        let Ok(value) = serde_json::from_str::<Value>(&line) else {
            continue;
        };
        if session_id.is_none() {
            session_id = value["sessionId"].as_str().map(str::to_string);
        }
        if cwd.is_none() {
            cwd = value["cwd"].as_str().map(str::to_string);
        }
        if session_id.is_some() && cwd.is_some() {
            break;
        }
    }
    (session_id, cwd)
}

pub(crate) fn candidates(base_dir: &Path) -> Result<Vec<fs_scan::FileEntry>> {
    collect_matching_files(base_dir, true, &|p| has_extension(p, "jsonl"))
}
