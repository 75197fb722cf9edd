// NOTE: crosscheck provider architecture
//
// Why schema-on-read (not a normalized store)?
// - Agent CLIs rewrite their log schemas without notice; parsing at read time
//   means a schema fix never requires re-ingesting anything.
// - Every invocation is a single batch read of finite on-disk files, so there
//   is nothing to keep in sync.
//
// Why per-line recovery inside multi-line formats?
// - A single corrupt line must not make a whole transcript unreadable. Skips
//   are counted and surfaced as warnings on the resulting record instead.
//
// Why explicit base-directory config (not env lookups in resolvers)?
// - Resolvers and parsers stay pure over their inputs; the CLI reads the
//   environment exactly once when it builds the registry.

pub mod claude;
pub mod codex;
pub mod config;
pub mod cursor;
pub mod gemini;
pub mod limits;
pub mod redact;
pub mod registry;
pub mod traits;

mod fs_scan;
mod transcript;

pub use config::StoreConfig;
pub use crosscheck_types::{Error, Result};
pub use redact::redact;
pub use registry::Registry;
pub use traits::{Resolved, SessionStore};
