use std::fmt;

/// Result type for crosscheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by every crosscheck layer.
///
/// Each variant carries the complete human-readable message; `code()` yields
/// the stable machine-readable code surfaced to JSON callers.
#[derive(Debug)]
pub enum Error {
    /// No session matched the given id/cwd scope
    NotFound(String),

    /// File unreadable or schema unrecognized after all fallback attempts
    ParseFailed(String),

    /// Handoff/request-object validation failure
    InvalidHandoff(String),

    /// Agent name outside the supported set
    UnsupportedAgent(String),

    /// Report mode outside the supported set
    UnsupportedMode(String),

    /// File found and parsed but contains zero usable turns
    EmptySession(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl Error {
    /// Stable machine-readable code for the `{error_code, message}` envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::ParseFailed(_) => "parse_failed",
            Error::InvalidHandoff(_) => "invalid_handoff",
            Error::UnsupportedAgent(_) => "unsupported_agent",
            Error::UnsupportedMode(_) => "unsupported_mode",
            Error::EmptySession(_) => "empty_session",
            Error::Io(_) => "io_error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg)
            | Error::ParseFailed(msg)
            | Error::InvalidHandoff(msg)
            | Error::UnsupportedAgent(msg)
            | Error::UnsupportedMode(msg)
            | Error::EmptySession(msg) => f.write_str(msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Map an arbitrary rendered error message back onto a taxonomy code.
///
/// Used by the CLI when an error reaches the top of the stack without a typed
/// `Error` in its chain (e.g. argument parsing failures).
pub fn classify_error(message: &str) -> &'static str {
    let lower = message.to_ascii_lowercase();
    if lower.contains("unsupported agent") {
        "unsupported_agent"
    } else if lower.contains("unsupported mode") {
        "unsupported_mode"
    } else if lower.contains("handoff") {
        "invalid_handoff"
    } else if lower.contains("no ") && lower.contains(" session found") {
        "not_found"
    } else if lower.contains("parse") || lower.contains("schema") {
        "parse_failed"
    } else {
        "io_error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_variants_display_raw_message() {
        let err = Error::NotFound("No Codex session found.".to_string());
        assert_eq!(err.to_string(), "No Codex session found.");
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn classify_recovers_codes_from_messages() {
        assert_eq!(classify_error("Unsupported agent: copilot"), "unsupported_agent");
        assert_eq!(classify_error("No Gemini session found."), "not_found");
        assert_eq!(classify_error("Failed to parse Gemini JSON: x"), "parse_failed");
    }
}
