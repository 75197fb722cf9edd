//! Testing infrastructure for crosscheck integration tests.
//!
//! - `TestWorld`: isolated per-agent session trees plus CLI execution
//! - `fixtures`: canned session file content for each supported agent

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
