use crate::fs_scan::{self, collect_matching_files, has_extension, path_contains};
use crate::traits::Resolved;
use crosscheck_types::{Error, Result, normalize_path};
use std::path::Path;

/// Resolve a Cursor chat file under the chats directory.
///
/// Cursor stores no cwd metadata, so scoping is a raw substring search for
/// the normalized cwd over file contents, newest first. A miss falls back to
/// the newest file with a warning, same as the other agents.
pub(crate) fn resolve(base_dir: &Path, id: Option<&str>, cwd: &str) -> Result<Resolved> {
    if !base_dir.exists() {
        return Err(Error::NotFound("No Cursor session found.".to_string()));
    }

    if let Some(id_value) = id {
        let files = collect_matching_files(base_dir, true, &|p| {
            is_chat_file(p) && path_contains(p, id_value)
        })?;
        return files
            .first()
            .map(|f| Resolved {
                path: f.path.clone(),
                warnings: Vec::new(),
            })
            .ok_or_else(|| Error::NotFound("No Cursor session found.".to_string()));
    }

    let files = collect_matching_files(base_dir, true, &is_chat_file)?;
    if files.is_empty() {
        return Err(Error::NotFound("No Cursor session found.".to_string()));
    }

    let expected_cwd = normalize_path(cwd);
    let needle = expected_cwd.to_string_lossy().to_string();
    for file in &files {
        if mentions_cwd(&file.path, &needle) {
            return Ok(Resolved {
                path: file.path.clone(),
                warnings: Vec::new(),
            });
        }
    }

    Ok(Resolved {
        path: files[0].path.clone(),
        warnings: vec![format!(
            "Warning: no Cursor session matched cwd {}; falling back to latest session.",
            expected_cwd.display()
        )],
    })
}

pub(crate) fn is_chat_file(path: &Path) -> bool {
    has_extension(path, "json") || has_extension(path, "jsonl")
}

/// Case-sensitive content probe; paths are compared verbatim.
fn mentions_cwd(path: &Path, needle: &str) -> bool {
    crate::fs_scan::read_session_text(path)
        .map(|text| text.contains(needle))
        .unwrap_or(false)
}

pub(crate) fn candidates(base_dir: &Path) -> Result<Vec<fs_scan::FileEntry>> {
    collect_matching_files(base_dir, true, &is_chat_file)
}

pub(crate) fn session_matches_cwd(path: &Path, cwd: &str) -> bool {
    let needle = normalize_path(cwd).to_string_lossy().to_string();
    mentions_cwd(path, &needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::FileTime;
    use std::path::PathBuf;

    fn write_chat(dir: &Path, name: &str, body: &str, mtime: i64) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        filetime::set_file_mtime(&path, FileTime::from_unix_time(mtime, 0)).unwrap();
        path
    }

    #[test]
    fn content_substring_scopes_to_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let project_cwd = project.path().canonicalize().unwrap();

        write_chat(dir.path(), "other.json", r#"{"content":"elsewhere"}"#, 200);
        write_chat(
            dir.path(),
            "match.json",
            &format!(
                r#"{{"content":"working in {}"}}"#,
                project_cwd.to_string_lossy()
            ),
            100,
        );

        let resolved = resolve(dir.path(), None, &project_cwd.to_string_lossy()).unwrap();
        assert!(resolved.path.ends_with("match.json"));
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn cwd_miss_falls_back_to_newest_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_chat(dir.path(), "a.json", r#"{"content":"a"}"#, 100);
        write_chat(dir.path(), "b.jsonl", r#"{"content":"b"}"#, 200);

        let resolved = resolve(dir.path(), None, "/no/such/project").unwrap();
        assert!(resolved.path.ends_with("b.jsonl"));
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].contains("no Cursor session matched cwd"));
    }

    #[test]
    fn id_substring_matches_either_extension() {
        let dir = tempfile::tempdir().unwrap();
        write_chat(dir.path(), "tab-42.jsonl", "{}", 100);

        let resolved = resolve(dir.path(), Some("tab-42"), "/p").unwrap();
        assert!(resolved.path.ends_with("tab-42.jsonl"));
    }

    #[test]
    fn missing_base_dir_is_not_found() {
        let err = resolve(Path::new("/nonexistent/cursor"), None, "/p").unwrap_err();
        assert_eq!(err.to_string(), "No Cursor session found.");
    }
}
