use crate::fs_scan::{self, collect_matching_files, has_extension, path_contains};
use crate::traits::Resolved;
use crosscheck_types::{Error, Result, expand_home, hash_path, is_system_dir, normalize_path};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Chat directories to scan, in priority order.
///
/// An explicit `chats_dir` override bypasses the hash derivation entirely but
/// is refused when it resolves to a well-known system directory. Otherwise
/// the cwd-scoped directory (`<base>/<sha256(cwd)>/chats`) comes first,
/// followed by every other `<base>/*/chats` directory, deduplicated.
pub(crate) fn resolve_dirs(
    base_dir: &Path,
    cwd: &str,
    chats_dir: Option<&str>,
) -> Result<Vec<PathBuf>> {
    if let Some(dir) = chats_dir {
        let expanded = expand_home(dir)
            .ok_or_else(|| Error::InvalidHandoff("Invalid Gemini chats directory".to_string()))?;
        if is_system_dir(&expanded) {
            return Err(Error::InvalidHandoff(format!(
                "Refusing to scan system directory: {}",
                expanded.display()
            )));
        }
        return if expanded.exists() {
            Ok(vec![expanded])
        } else {
            Ok(Vec::new())
        };
    }

    let mut ordered = Vec::new();
    let mut seen = HashSet::new();
    let mut add_dir = |dir: PathBuf| {
        if dir.exists() && seen.insert(dir.clone()) {
            ordered.push(dir);
        }
    };

    let scoped_hash = hash_path(&normalize_path(cwd));
    add_dir(base_dir.join(&scoped_hash).join("chats"));

    if let Ok(entries) = std::fs::read_dir(base_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                add_dir(path.join("chats"));
            }
        }
    }

    Ok(ordered)
}

/// Resolve the Gemini session file: the newest match from the first
/// directory in priority order that has one. Later directories are only
/// consulted when earlier ones are empty, so the cwd-scoped directory wins
/// over newer sessions from other projects. With an id, any `.json` whose
/// path contains it; without one, only files named `session-*.json` qualify.
pub(crate) fn resolve(
    base_dir: &Path,
    id: Option<&str>,
    cwd: &str,
    chats_dir: Option<&str>,
) -> Result<Resolved> {
    let dirs = resolve_dirs(base_dir, cwd, chats_dir)?;

    for dir in &dirs {
        let mut files = collect_matching_files(dir, false, &|p| match id {
            Some(id_value) => has_extension(p, "json") && path_contains(p, id_value),
            None => has_extension(p, "json") && is_session_file(p),
        })?;
        if files.is_empty() {
            continue;
        }
        fs_scan::sort_newest_first(&mut files);
        return Ok(Resolved {
            path: files[0].path.clone(),
            warnings: Vec::new(),
        });
    }

    Err(Error::NotFound("No Gemini session found.".to_string()))
}

pub(crate) fn is_session_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| name.starts_with("session-"))
        .unwrap_or(false)
}

pub(crate) fn candidates(base_dir: &Path, cwd: &str) -> Result<Vec<fs_scan::FileEntry>> {
    let dirs = resolve_dirs(base_dir, cwd, None)?;
    let mut out = Vec::new();
    for dir in &dirs {
        let mut files = collect_matching_files(dir, false, &|p| {
            has_extension(p, "json") && is_session_file(p)
        })?;
        out.append(&mut files);
    }
    fs_scan::sort_newest_first(&mut out);
    Ok(out)
}
