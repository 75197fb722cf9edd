use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Expand a leading tilde to the user's home directory.
pub fn expand_home(path_str: &str) -> Option<PathBuf> {
    if path_str == "~" {
        return dirs::home_dir();
    }
    if let Some(stripped) = path_str.strip_prefix("~/") {
        return dirs::home_dir().map(|home| home.join(stripped));
    }
    Some(PathBuf::from(path_str))
}

/// Normalize a path string for comparison: tilde-expand, absolutize against
/// the process cwd, canonicalize when the path exists.
pub fn normalize_path(path_str: &str) -> PathBuf {
    let expanded = expand_home(path_str).unwrap_or_else(|| PathBuf::from(path_str));
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    };
    absolute.canonicalize().unwrap_or(absolute)
}

/// SHA-256 hex digest of a path string. Gemini derives its per-project chat
/// directory name from this hash of the normalized cwd.
pub fn hash_path(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Well-known OS/system directories that must never be scanned even when a
/// caller supplies them explicitly.
const SYSTEM_DIRS: &[&str] = &[
    "/", "/bin", "/boot", "/dev", "/etc", "/lib", "/proc", "/root", "/sbin", "/sys", "/usr",
    "/var", "C:\\", "C:\\Windows",
];

/// Guard against accidental scans of system directories when an explicit
/// directory override is supplied.
pub fn is_system_dir(path: &Path) -> bool {
    let normalized = path
        .canonicalize()
        .unwrap_or_else(|_| path.to_path_buf());
    let as_str = normalized.to_string_lossy();
    SYSTEM_DIRS
        .iter()
        .any(|sys| as_str.as_ref() == *sys || as_str.as_ref() == sys.trim_end_matches('/'))
}

/// Truncate a string to a maximum number of characters.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_path_is_deterministic() {
        let a = hash_path(Path::new("/workspace/demo"));
        let b = hash_path(Path::new("/workspace/demo"));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn normalize_relative_path_is_absolute() {
        let normalized = normalize_path("some/relative/dir");
        assert!(normalized.is_absolute());
    }

    #[test]
    fn system_dirs_are_rejected() {
        assert!(is_system_dir(Path::new("/etc")));
        assert!(is_system_dir(Path::new("/")));
        let tmp = tempfile::tempdir().unwrap();
        assert!(!is_system_dir(tmp.path()));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("abcdefghij", 8), "abcdefgh");
        assert_eq!(truncate_chars("ab", 8), "ab");
    }
}
