//! TestWorld pattern for declarative integration test setup.
//!
//! Builds an isolated temp tree with one base directory per agent, wires the
//! `CROSSCHECK_*_DIR` environment variables for CLI runs, and exposes the
//! same directories as a `StoreConfig` for in-process engine tests.

use anyhow::Result;
use assert_cmd::Command;
use crosscheck_providers::StoreConfig;
use crosscheck_types::hash_path;
use filetime::FileTime;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    codex_dir: PathBuf,
    claude_dir: PathBuf,
    gemini_dir: PathBuf,
    cursor_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with empty agent trees and a
    /// `project` directory used as the default cwd.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path().to_path_buf();

        let codex_dir = base.join("codex-sessions");
        let claude_dir = base.join("claude-projects");
        let gemini_dir = base.join("gemini-tmp");
        let cursor_dir = base.join("cursor-chats");
        let cwd = base.join("project");
        for dir in [&codex_dir, &claude_dir, &gemini_dir, &cursor_dir, &cwd] {
            std::fs::create_dir_all(dir).expect("Failed to create dir");
        }

        Self {
            temp_dir,
            // Canonicalized so embedded-cwd comparisons behave like the real
            // normalizer (macOS /private/tmp, symlinked temp dirs).
            cwd: cwd.canonicalize().expect("Failed to canonicalize cwd"),
            codex_dir,
            claude_dir,
            gemini_dir,
            cursor_dir,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn cwd_str(&self) -> String {
        self.cwd.to_string_lossy().to_string()
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn codex_dir(&self) -> &Path {
        &self.codex_dir
    }

    pub fn claude_dir(&self) -> &Path {
        &self.claude_dir
    }

    pub fn gemini_dir(&self) -> &Path {
        &self.gemini_dir
    }

    pub fn cursor_dir(&self) -> &Path {
        &self.cursor_dir
    }

    /// Provider configuration pointing at this world's agent trees.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            codex_dir: Some(self.codex_dir.clone()),
            claude_dir: Some(self.claude_dir.clone()),
            gemini_dir: Some(self.gemini_dir.clone()),
            cursor_dir: Some(self.cursor_dir.clone()),
        }
    }

    /// Write a Codex session file.
    pub fn write_codex(&self, name: &str, content: &str) -> PathBuf {
        write_file(&self.codex_dir.join(name), content)
    }

    /// Write a Claude session file under a project subdirectory.
    pub fn write_claude(&self, project: &str, name: &str, content: &str) -> PathBuf {
        write_file(&self.claude_dir.join(project).join(name), content)
    }

    /// Write a Gemini session into the chats directory hashed from this
    /// world's default cwd.
    pub fn write_gemini(&self, name: &str, content: &str) -> PathBuf {
        let dir = self.gemini_dir.join(hash_path(&self.cwd)).join("chats");
        write_file(&dir.join(name), content)
    }

    /// Write a Gemini session into an arbitrary hash directory.
    pub fn write_gemini_in(&self, hash_dir: &str, name: &str, content: &str) -> PathBuf {
        let dir = self.gemini_dir.join(hash_dir).join("chats");
        write_file(&dir.join(name), content)
    }

    /// Write a Cursor chat file.
    pub fn write_cursor(&self, name: &str, content: &str) -> PathBuf {
        write_file(&self.cursor_dir.join(name), content)
    }

    /// Write an arbitrary file under the temp root (handoffs, scratch data).
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        write_file(&self.temp_dir.path().join(name), content)
    }

    /// Pin a file's mtime so newest-first ordering is deterministic.
    pub fn set_mtime(&self, path: &Path, unix_secs: i64) {
        filetime::set_file_mtime(path, FileTime::from_unix_time(unix_secs, 0))
            .expect("Failed to set mtime");
    }

    /// Run the crosscheck binary with this world's directories and cwd.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("crosscheck")
            .map_err(|e| anyhow::anyhow!("Failed to find crosscheck binary: {}", e))?;
        cmd.current_dir(&self.cwd)
            .env("CROSSCHECK_CODEX_DIR", &self.codex_dir)
            .env("CROSSCHECK_CLAUDE_DIR", &self.claude_dir)
            .env("CROSSCHECK_GEMINI_DIR", &self.gemini_dir)
            .env("CROSSCHECK_CURSOR_DIR", &self.cursor_dir)
            .args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(path, content).expect("Failed to write file");
    path.to_path_buf()
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
