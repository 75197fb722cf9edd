use crosscheck_types::expand_home;
use std::path::PathBuf;

/// Per-agent base-directory overrides threaded through registry construction.
///
/// Unset fields fall back to the agent's conventional storage location. The
/// struct is plain data so resolvers never consult ambient process state.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub codex_dir: Option<PathBuf>,
    pub claude_dir: Option<PathBuf>,
    pub gemini_dir: Option<PathBuf>,
    pub cursor_dir: Option<PathBuf>,
}

impl StoreConfig {
    pub fn codex_base(&self) -> PathBuf {
        self.codex_dir
            .clone()
            .unwrap_or_else(|| default_dir("~/.codex/sessions"))
    }

    pub fn claude_base(&self) -> PathBuf {
        self.claude_dir
            .clone()
            .unwrap_or_else(|| default_dir("~/.claude/projects"))
    }

    /// Gemini stores per-project chat dirs under a tmp root keyed by cwd hash.
    pub fn gemini_base(&self) -> PathBuf {
        self.gemini_dir
            .clone()
            .unwrap_or_else(|| default_dir("~/.gemini/tmp"))
    }

    pub fn cursor_base(&self) -> PathBuf {
        self.cursor_dir
            .clone()
            .unwrap_or_else(|| default_dir("~/.cursor/chats"))
    }
}

fn default_dir(tilde_path: &str) -> PathBuf {
    expand_home(tilde_path).unwrap_or_else(|| PathBuf::from(tilde_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_precedence() {
        let config = StoreConfig {
            codex_dir: Some(PathBuf::from("/tmp/codex-test")),
            ..Default::default()
        };
        assert_eq!(config.codex_base(), PathBuf::from("/tmp/codex-test"));
    }

    #[test]
    fn defaults_point_at_conventional_locations() {
        let config = StoreConfig::default();
        assert!(config.claude_base().ends_with(".claude/projects"));
        assert!(config.gemini_base().ends_with(".gemini/tmp"));
    }
}
