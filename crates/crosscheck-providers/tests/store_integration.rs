//! End-to-end store behavior through the registry: resolve, read, list and
//! search against real temp directory trees for each agent family.

use crosscheck_providers::{Registry, StoreConfig};
use crosscheck_types::{Agent, hash_path};
use filetime::FileTime;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Env {
    _root: TempDir,
    codex: PathBuf,
    claude: PathBuf,
    gemini: PathBuf,
    cursor: PathBuf,
    cwd: PathBuf,
}

impl Env {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let base = root.path().to_path_buf();
        let env = Self {
            codex: base.join("codex"),
            claude: base.join("claude"),
            gemini: base.join("gemini"),
            cursor: base.join("cursor"),
            cwd: base.join("project"),
            _root: root,
        };
        for dir in [&env.codex, &env.claude, &env.gemini, &env.cursor, &env.cwd] {
            std::fs::create_dir_all(dir).unwrap();
        }
        env
    }

    fn registry(&self) -> Registry {
        Registry::new(StoreConfig {
            codex_dir: Some(self.codex.clone()),
            claude_dir: Some(self.claude.clone()),
            gemini_dir: Some(self.gemini.clone()),
            cursor_dir: Some(self.cursor.clone()),
        })
    }

    fn cwd_str(&self) -> String {
        self.cwd.canonicalize().unwrap().to_string_lossy().to_string()
    }

    fn write(&self, path: &Path, content: &str, mtime: i64) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
        filetime::set_file_mtime(path, FileTime::from_unix_time(mtime, 0)).unwrap();
    }
}

#[test]
fn test_codex_read_produces_canonical_record() {
    let env = Env::new();
    env.write(
        &env.codex.join("rollout-2026-abc.jsonl"),
        &format!(
            "{}\n{}\n",
            serde_json::json!({"type":"session_meta","payload":{"id":"abc-uuid","cwd":env.cwd_str()}}),
            serde_json::json!({"type":"event_msg","payload":{"type":"agent_message","message":"refactor complete"}}),
        ),
        1_000,
    );

    let record = env
        .registry()
        .store(Agent::Codex)
        .read(None, &env.cwd_str(), None, 1)
        .unwrap();

    assert_eq!(record.agent, Agent::Codex);
    assert_eq!(record.content, "refactor complete");
    assert_eq!(record.session_id, "abc-uuid");
    assert_eq!(record.cwd.as_deref(), Some(env.cwd_str().as_str()));
    assert_eq!(record.message_count, 1);
    assert_eq!(record.messages_returned, 1);
    assert!(record.warnings.is_empty());
    assert!(record.source.ends_with("rollout-2026-abc.jsonl"));
    assert!(record.timestamp.starts_with("1970-01-01T00:16:40"));
}

#[test]
fn test_codex_cwd_fallback_emits_warning() {
    let env = Env::new();
    env.write(
        &env.codex.join("other.jsonl"),
        &serde_json::json!({"type":"session_meta","payload":{"id":"x","cwd":"/elsewhere"}}).to_string(),
        1_000,
    );

    let record = env
        .registry()
        .store(Agent::Codex)
        .read(None, &env.cwd_str(), None, 1)
        .unwrap();

    assert_eq!(record.warnings.len(), 1);
    assert!(record.warnings[0].starts_with("Warning: no Codex session matched cwd"));
    assert!(record.warnings[0].ends_with("falling back to latest session."));
    // No messages either: raw-tail contract.
    assert_eq!(record.message_count, 0);
    assert_eq!(record.messages_returned, 0);
}

#[test]
fn test_claude_read_redacts_secrets_in_content() {
    let env = Env::new();
    let answer = "set OPENAI_API_KEY=sk-abcdefghij0123456789 and Bearer abcdef1234567890";
    env.write(
        &env.claude.join("-project").join("sess-1.jsonl"),
        &serde_json::json!({
            "type":"assistant","sessionId":"sess-1","cwd":env.cwd_str(),
            "message":{"role":"assistant","content":[{"type":"text","text":answer}]}
        })
        .to_string(),
        1_000,
    );

    let record = env
        .registry()
        .store(Agent::Claude)
        .read(None, &env.cwd_str(), None, 1)
        .unwrap();

    assert!(record.content.contains("OPENAI_API_KEY=[REDACTED]"));
    assert!(record.content.contains("Bearer [REDACTED]"));
    assert!(!record.content.contains("sk-abcdefghij0123456789"));
}

#[test]
fn test_gemini_hashed_dir_scoping_beats_newer_session() {
    let env = Env::new();
    let scoped = hash_path(&env.cwd.canonicalize().unwrap());
    env.write(
        &env.gemini.join(&scoped).join("chats").join("session-mine.json"),
        &serde_json::json!({"sessionId":"mine","messages":[{"type":"gemini","content":"scoped answer"}]}).to_string(),
        1_000,
    );
    env.write(
        &env.gemini.join("other-hash").join("chats").join("session-other.json"),
        &serde_json::json!({"sessionId":"other","messages":[{"type":"gemini","content":"other answer"}]}).to_string(),
        2_000,
    );

    let record = env
        .registry()
        .store(Agent::Gemini)
        .read(None, &env.cwd_str(), None, 1)
        .unwrap();

    assert_eq!(record.content, "scoped answer");
    assert_eq!(record.session_id, "mine");
    assert!(record.cwd.is_none());
}

#[test]
fn test_cursor_content_scoping_and_jsonl_fallback() {
    let env = Env::new();
    env.write(
        &env.cursor.join("unrelated.json"),
        r#"{"messages":[{"role":"assistant","content":"not yours"}]}"#,
        2_000,
    );
    env.write(
        &env.cursor.join("mine.jsonl"),
        &format!(
            "{}\n{}\n",
            serde_json::json!({"role":"user","content":format!("context: {}", env.cwd_str())}),
            serde_json::json!({"role":"assistant","content":"cursor answer"}),
        ),
        1_000,
    );

    let record = env
        .registry()
        .store(Agent::Cursor)
        .read(None, &env.cwd_str(), None, 1)
        .unwrap();

    assert_eq!(record.content, "cursor answer");
    assert!(record.source.ends_with("mine.jsonl"));
    assert!(record.warnings.is_empty());
}

#[test]
fn test_missing_directories_yield_not_found_messages() {
    let env = Env::new();
    std::fs::remove_dir(&env.codex).unwrap();
    let registry = env.registry();

    let err = registry
        .store(Agent::Codex)
        .read(None, &env.cwd_str(), None, 1)
        .unwrap_err();
    assert_eq!(err.to_string(), "No Codex session found.");

    let err = registry
        .store(Agent::Gemini)
        .read(None, &env.cwd_str(), None, 1)
        .unwrap_err();
    assert_eq!(err.to_string(), "No Gemini session found.");

    let err = registry
        .store(Agent::Cursor)
        .read(Some("nope"), &env.cwd_str(), None, 1)
        .unwrap_err();
    assert_eq!(err.to_string(), "No Cursor session found.");
}

#[test]
fn test_list_orders_newest_first_and_respects_limit() {
    let env = Env::new();
    for (name, mtime) in [("a.jsonl", 100), ("b.jsonl", 300), ("c.jsonl", 200)] {
        env.write(
            &env.codex.join(name),
            &serde_json::json!({
                "type":"session_meta",
                "payload":{"id":name,"cwd":env.cwd_str()}
            })
            .to_string(),
            mtime,
        );
    }

    let entries = env.registry().store(Agent::Codex).list(None, 2).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].session_id, "b.jsonl");
    assert_eq!(entries[1].session_id, "c.jsonl");
    assert_eq!(entries[0].agent, Agent::Codex);
}

#[test]
fn test_search_is_case_insensitive_over_content() {
    let env = Env::new();
    env.write(
        &env.cursor.join("hit.json"),
        r#"{"messages":[{"role":"assistant","content":"Deployed the Billing Service"}]}"#,
        100,
    );
    env.write(
        &env.cursor.join("miss.json"),
        r#"{"messages":[{"role":"assistant","content":"unrelated"}]}"#,
        200,
    );

    let entries = env
        .registry()
        .store(Agent::Cursor)
        .search("billing service", None, 10)
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].file_path.ends_with("hit.json"));
}

#[test]
fn test_id_substring_resolution_through_registry_by_name() {
    let env = Env::new();
    env.write(
        &env.codex.join("rollout-2026-02-10-abcd1234.jsonl"),
        &serde_json::json!({
            "type":"session_meta",
            "payload":{"id":"abcd1234","cwd":"/elsewhere"}
        })
        .to_string(),
        100,
    );

    let store = env.registry().store_by_name("codex").unwrap();
    let resolved = store.resolve(Some("abcd1234"), &env.cwd_str(), None).unwrap();
    assert!(resolved.path.ends_with("rollout-2026-02-10-abcd1234.jsonl"));
    assert!(resolved.warnings.is_empty());
}
