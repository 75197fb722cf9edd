//! Black-box CLI tests: command surface, output contracts and the JSON
//! error envelope.

use crosscheck_testing::{TestWorld, fixtures};

#[test]
fn test_read_json_emits_full_record() {
    let world = TestWorld::new();
    world.write_codex(
        "rollout-abc.jsonl",
        &fixtures::codex_session("abc-uuid", &world.cwd_str(), "the final answer"),
    );

    let result = world
        .run(&["read", "--agent", "codex", "--json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let record = result.json().unwrap();
    assert_eq!(record["agent"], "codex");
    assert_eq!(record["content"], "the final answer");
    assert_eq!(record["session_id"], "abc-uuid");
    assert_eq!(record["message_count"], 1);
    assert_eq!(record["messages_returned"], 1);
    assert_eq!(record["warnings"].as_array().unwrap().len(), 0);
    assert!(record["source"].as_str().unwrap().ends_with("rollout-abc.jsonl"));
}

#[test]
fn test_read_text_output_shape_and_warning_on_stderr() {
    let world = TestWorld::new();
    // cwd mismatch forces the fallback warning, which must go to stderr.
    world.write_codex(
        "rollout-abc.jsonl",
        &fixtures::codex_session("abc-uuid", "/elsewhere", "plain text answer"),
    );

    let result = world.run(&["read", "--agent", "codex"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().starts_with("SOURCE: Codex Session ("));
    assert!(result.stdout().contains("\n---\n"));
    assert!(result.stdout().contains("plain text answer"));
    assert!(result.stderr().contains("falling back to latest session"));
    assert!(!result.stdout().contains("falling back to latest session"));
}

#[test]
fn test_read_last_n_joins_turns() {
    let world = TestWorld::new();
    world.write_codex(
        "rollout-abc.jsonl",
        &fixtures::codex_session_multi("abc", &world.cwd_str(), &["one", "two", "three"]),
    );

    let result = world
        .run(&["read", "--agent", "codex", "--last", "2", "--json"])
        .unwrap();
    let record = result.json().unwrap();
    assert_eq!(record["content"], "two\n---\nthree");
    assert_eq!(record["message_count"], 3);
    assert_eq!(record["messages_returned"], 2);
}

#[test]
fn test_compare_markdown_and_json() {
    let world = TestWorld::new();
    world.write_codex(
        "a.jsonl",
        &fixtures::codex_session("c1", &world.cwd_str(), "agreed"),
    );
    world.write_gemini("session-1.json", &fixtures::gemini_session("g1", "agreed"));

    let markdown = world
        .run(&["compare", "--source", "codex", "--source", "gemini"])
        .unwrap();
    assert!(markdown.success(), "stderr: {}", markdown.stderr());
    assert!(markdown.stdout().starts_with("### Crosscheck Report"));
    assert!(markdown.stdout().contains("**Verdict:** ANALYSIS_COMPLETE"));
    assert!(markdown
        .stdout()
        .contains("All available agent outputs are aligned"));

    let json = world
        .run(&["compare", "--source", "codex", "--source", "gemini", "--json"])
        .unwrap();
    let report = json.json().unwrap();
    assert_eq!(report["mode"], "analyze");
    assert_eq!(report["task"], "Compare agent outputs");
    assert_eq!(report["verdict"], "ANALYSIS_COMPLETE");
}

#[test]
fn test_report_from_handoff_file() {
    let world = TestWorld::new();
    world.write_claude(
        "-project",
        "s.jsonl",
        &fixtures::claude_session("claude-1", &world.cwd_str(), "verified output"),
    );
    let handoff = world.write_file(
        "handoff.json",
        &fixtures::handoff(
            "verify",
            &[serde_json::json!({"agent": "claude", "current_session": true})],
        ),
    );

    let result = world
        .run(&["report", "--handoff", handoff.to_str().unwrap(), "--json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let report = result.json().unwrap();
    assert_eq!(report["mode"], "verify");
    // One source, nothing missing: insufficient for comparison but not FAIL.
    assert_eq!(report["verdict"], "PASS");
    assert!(report["sources_used"][0]
        .as_str()
        .unwrap()
        .starts_with("[claude:latest] "));
}

#[test]
fn test_invalid_handoff_envelope() {
    let world = TestWorld::new();
    let handoff = world.write_file("bad.json", r#"{"mode":"verify","extra_field":true}"#);

    let result = world
        .run(&["report", "--handoff", handoff.to_str().unwrap(), "--json"])
        .unwrap();
    assert!(!result.success());

    let envelope = result.json().unwrap();
    assert_eq!(envelope["error_code"], "invalid_handoff");
    assert!(envelope["message"]
        .as_str()
        .unwrap()
        .contains("unexpected fields: extra_field"));
}

#[test]
fn test_not_found_envelope() {
    let world = TestWorld::new();

    let result = world
        .run(&["read", "--agent", "gemini", "--json"])
        .unwrap();
    assert!(!result.success());

    let envelope = result.json().unwrap();
    assert_eq!(envelope["error_code"], "not_found");
    assert_eq!(envelope["message"], "No Gemini session found.");
}

#[test]
fn test_unsupported_agent_envelope_from_clap() {
    let world = TestWorld::new();

    let result = world
        .run(&["read", "--agent", "copilot", "--json"])
        .unwrap();
    assert!(!result.success());

    let envelope = result.json().unwrap();
    assert_eq!(envelope["error_code"], "unsupported_agent");
}

#[test]
fn test_list_json_and_plain_lines() {
    let world = TestWorld::new();
    let a = world.write_codex(
        "a.jsonl",
        &fixtures::codex_session("older", &world.cwd_str(), "x"),
    );
    let b = world.write_codex(
        "b.jsonl",
        &fixtures::codex_session("newer", &world.cwd_str(), "y"),
    );
    world.set_mtime(&a, 100);
    world.set_mtime(&b, 200);

    let json = world
        .run(&["list", "--agent", "codex", "--json"])
        .unwrap();
    let entries = json.json().unwrap();
    let ids: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["session_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["newer", "older"]);

    let plain = world.run(&["list", "--agent", "codex"]).unwrap();
    assert_eq!(plain.stdout().lines().count(), 2);
    for line in plain.stdout().lines() {
        serde_json::from_str::<serde_json::Value>(line).unwrap();
    }
}

#[test]
fn test_search_scopes_to_content() {
    let world = TestWorld::new();
    world.write_cursor("hit.json", &fixtures::cursor_chat("/p", "deployed billing"));
    world.write_cursor("miss.json", &fixtures::cursor_chat("/p", "something else"));

    let result = world
        .run(&["search", "billing", "--agent", "cursor", "--json"])
        .unwrap();
    let entries = result.json().unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert!(entries[0]["file_path"]
        .as_str()
        .unwrap()
        .ends_with("hit.json"));
}

#[test]
fn test_gemini_system_chats_dir_is_refused() {
    let world = TestWorld::new();

    let result = world
        .run(&[
            "read",
            "--agent",
            "gemini",
            "--chats-dir",
            "/etc",
            "--json",
        ])
        .unwrap();
    assert!(!result.success());

    let envelope = result.json().unwrap();
    assert_eq!(envelope["error_code"], "invalid_handoff");
    assert!(envelope["message"]
        .as_str()
        .unwrap()
        .contains("Refusing to scan system directory"));
}
