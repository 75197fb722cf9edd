use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of supported agent families.
///
/// Keeping this an enum (rather than open-ended string lookup) makes the
/// variant set exhaustive-checkable wherever per-agent behavior branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Codex,
    Gemini,
    Claude,
    Cursor,
}

impl Agent {
    pub const ALL: [Agent; 4] = [Agent::Codex, Agent::Gemini, Agent::Claude, Agent::Cursor];

    /// Canonical lowercase name used in CLI arguments, evidence tags and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Agent::Codex => "codex",
            Agent::Gemini => "gemini",
            Agent::Claude => "claude",
            Agent::Cursor => "cursor",
        }
    }

    /// Human-facing capitalized name for terminal output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Agent::Codex => "Codex",
            Agent::Gemini => "Gemini",
            Agent::Claude => "Claude",
            Agent::Cursor => "Cursor",
        }
    }

    pub fn parse(name: &str) -> Result<Agent> {
        match name.to_ascii_lowercase().as_str() {
            "codex" => Ok(Agent::Codex),
            "gemini" => Ok(Agent::Gemini),
            "claude" => Ok(Agent::Claude),
            "cursor" => Ok(Agent::Cursor),
            other => Err(Error::UnsupportedAgent(format!(
                "Unsupported agent: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Agent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Agent> {
        Agent::parse(s)
    }
}
