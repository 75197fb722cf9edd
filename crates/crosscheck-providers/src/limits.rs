//! Defensive resource ceilings enforced at the resolver and parser layers.

/// Maximum number of files examined during a single directory scan.
pub const MAX_SCAN_FILES: usize = 1000;

/// Maximum size of a single session file; larger files fail the parse instead
/// of being loaded.
pub const MAX_SESSION_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Number of trailing raw lines returned when a file yields no structured
/// messages. The exact formatting of that fallback text is non-contractual.
pub const RAW_TAIL_LINES: usize = 20;

/// Separator between turns when more than one assistant message is returned.
pub const TURN_SEPARATOR: &str = "\n---\n";
