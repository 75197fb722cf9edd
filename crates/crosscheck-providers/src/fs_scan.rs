//! Shared filesystem discovery helpers: bounded directory walks, newest-first
//! ordering with deterministic tie-breaks, and size-capped file reads.

use crate::limits::{MAX_SCAN_FILES, MAX_SESSION_FILE_BYTES};
use chrono::{DateTime, SecondsFormat, Utc};
use crosscheck_types::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub(crate) struct FileEntry {
    pub path: PathBuf,
    /// Nanoseconds since epoch; nanosecond precision where the platform
    /// provides it, zero-padded otherwise.
    pub mtime_ns: u128,
}

/// Collect files under `dir` matching `predicate`, newest first.
///
/// Ties on modification time break toward the lexicographically smallest path
/// so repeated runs over the same tree are deterministic. At most
/// `MAX_SCAN_FILES` files are examined per walk.
pub(crate) fn collect_matching_files<F>(
    dir: &Path,
    recursive: bool,
    predicate: &F,
) -> Result<Vec<FileEntry>>
where
    F: Fn(&Path) -> bool,
{
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut matches = Vec::new();
    let mut examined = 0usize;

    for entry in WalkDir::new(dir)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        examined += 1;
        if examined > MAX_SCAN_FILES {
            break;
        }

        if !predicate(path) {
            continue;
        }

        matches.push(FileEntry {
            path: path.to_path_buf(),
            mtime_ns: mtime_ns(path),
        });
    }

    sort_newest_first(&mut matches);
    Ok(matches)
}

pub(crate) fn sort_newest_first(files: &mut [FileEntry]) {
    files.sort_by(|a, b| {
        b.mtime_ns
            .cmp(&a.mtime_ns)
            .then_with(|| a.path.cmp(&b.path))
    });
}

fn mtime_ns(path: &Path) -> u128 {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
}

/// File modification time rendered as RFC 3339 UTC.
pub(crate) fn mtime_rfc3339(path: &Path) -> String {
    let modified = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH);
    DateTime::<Utc>::from(modified).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Read a session file, refusing anything above the size ceiling.
pub(crate) fn read_session_text(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_SESSION_FILE_BYTES {
        return Err(Error::ParseFailed(format!(
            "Session file too large ({} bytes, limit {}): {}",
            metadata.len(),
            MAX_SESSION_FILE_BYTES,
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Case-insensitive content probe used by search and Cursor cwd-scoping.
/// Unreadable or oversize files simply fail the probe.
pub(crate) fn content_contains(path: &Path, needle_lower: &str) -> bool {
    read_session_text(path)
        .map(|text| text.to_lowercase().contains(needle_lower))
        .unwrap_or(false)
}

pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|value| value.to_str())
        .map(|value| value.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

pub(crate) fn path_contains(path: &Path, needle: &str) -> bool {
    path.to_string_lossy().contains(needle)
}

/// File name without extension, used as the session id fallback.
pub(crate) fn file_stem_string(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}
