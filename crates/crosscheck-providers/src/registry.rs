use crate::claude::ClaudeStore;
use crate::codex::CodexStore;
use crate::config::StoreConfig;
use crate::cursor::CursorStore;
use crate::gemini::GeminiStore;
use crate::traits::SessionStore;
use crosscheck_types::{Agent, Result};

/// Enum-keyed adapter registry. The agent set is closed, so lookup by
/// `Agent` is infallible; only name parsing can fail (`UnsupportedAgent`).
pub struct Registry {
    config: StoreConfig,
}

impl Registry {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn store(&self, agent: Agent) -> Box<dyn SessionStore> {
        match agent {
            Agent::Codex => Box::new(CodexStore::new(self.config.codex_base())),
            Agent::Claude => Box::new(ClaudeStore::new(self.config.claude_base())),
            Agent::Gemini => Box::new(GeminiStore::new(self.config.gemini_base())),
            Agent::Cursor => Box::new(CursorStore::new(self.config.cursor_base())),
        }
    }

    pub fn store_by_name(&self, name: &str) -> Result<Box<dyn SessionStore>> {
        Agent::parse(name).map(|agent| self.store(agent))
    }
}
