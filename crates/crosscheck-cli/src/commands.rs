use crate::args::{Cli, Commands};
use crate::output::sanitize_for_terminal;
use anyhow::{Context, Result};
use crosscheck_engine::{ReportRequest, build_report, load_handoff, parse_source_arg, report_to_markdown};
use crosscheck_providers::{Registry, StoreConfig};
use crosscheck_types::{Agent, Report, ReportMode, SourceSpec, normalize_path};
use std::path::{Path, PathBuf};

pub fn run(cli: Cli) -> Result<()> {
    let registry = Registry::new(store_config_from_env());

    match cli.command {
        Commands::Read {
            agent,
            id,
            cwd,
            chats_dir,
            last,
            json,
        } => {
            let agent: Agent = agent.into();
            let effective_cwd = effective_cwd(cwd);
            let last_n = last.max(1);
            let record = registry.store(agent).read(
                id.as_deref(),
                &effective_cwd,
                chats_dir.as_deref(),
                last_n,
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                for warning in &record.warnings {
                    eprintln!("{}", sanitize_for_terminal(warning));
                }
                println!(
                    "SOURCE: {} Session ({})",
                    agent.display_name(),
                    sanitize_for_terminal(&record.source)
                );
                println!("---");
                println!("{}", sanitize_for_terminal(&record.content));
            }
        }
        Commands::Compare {
            sources,
            cwd,
            normalize,
            json,
        } => {
            let effective_cwd = effective_cwd(cwd);
            let source_specs = sources
                .iter()
                .map(|raw| parse_source_arg(raw))
                .collect::<crosscheck_types::Result<Vec<SourceSpec>>>()?;

            // Compare is sugar for an analyze-mode report over the given
            // sources with a fixed task statement.
            let request = ReportRequest {
                mode: ReportMode::Analyze,
                task: "Compare agent outputs".to_string(),
                success_criteria: vec![
                    "Identify agreements and contradictions".to_string(),
                    "Highlight unavailable sources".to_string(),
                ],
                sources: source_specs,
                constraints: Vec::new(),
                normalize,
            };

            let report = build_report(&registry, &request, &effective_cwd);
            emit_report(&report, json)?;
        }
        Commands::Report { handoff, cwd, json } => {
            let effective_cwd = effective_cwd(cwd);
            let request = load_handoff(Path::new(&handoff))
                .with_context(|| format!("Failed to load handoff packet from {}", handoff))?;
            let report = build_report(&registry, &request, &effective_cwd);
            emit_report(&report, json)?;
        }
        Commands::List {
            agent,
            cwd,
            limit,
            json,
        } => {
            let normalized_cwd = cwd.map(|value| display_path(&normalize_path(&value)));
            let entries = registry
                .store(agent.into())
                .list(normalized_cwd.as_deref(), limit)?;
            emit_summaries(&entries, json)?;
        }
        Commands::Search {
            query,
            agent,
            cwd,
            limit,
            json,
        } => {
            let normalized_cwd = cwd.map(|value| display_path(&normalize_path(&value)));
            let entries = registry
                .store(agent.into())
                .search(&query, normalized_cwd.as_deref(), limit)?;
            emit_summaries(&entries, json)?;
        }
    }

    Ok(())
}

/// Per-agent base-directory overrides, read from the environment exactly
/// once, here at the process edge.
fn store_config_from_env() -> StoreConfig {
    StoreConfig {
        codex_dir: env_dir("CROSSCHECK_CODEX_DIR"),
        claude_dir: env_dir("CROSSCHECK_CLAUDE_DIR"),
        gemini_dir: env_dir("CROSSCHECK_GEMINI_DIR"),
        cursor_dir: env_dir("CROSSCHECK_CURSOR_DIR"),
    }
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn emit_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", sanitize_for_terminal(&report_to_markdown(report)));
    }
    Ok(())
}

fn emit_summaries(entries: &[crosscheck_types::SessionSummary], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!("{}", serde_json::to_string(entry)?);
        }
    }
    Ok(())
}

fn effective_cwd(cwd: Option<String>) -> String {
    cwd.unwrap_or_else(|| {
        std::env::current_dir()
            .map(|path| path.to_string_lossy().to_string())
            .unwrap_or_else(|_| ".".to_string())
    })
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
