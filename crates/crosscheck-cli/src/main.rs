use clap::Parser;
use crosscheck_cli::args::Cli;
use crosscheck_types::{Error, classify_error};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Argument errors still honor --json so callers always get an
            // envelope they can parse.
            let has_json = std::env::args().any(|a| a == "--json");
            if has_json {
                let msg = e.to_string();
                let code = if msg.contains("invalid value") && msg.contains("--agent") {
                    "unsupported_agent"
                } else {
                    classify_error(&msg)
                };
                emit_error_envelope(code, msg.lines().next().unwrap_or(""));
                std::process::exit(1);
            }
            e.exit();
        }
    };

    let json_mode = cli.command.json_mode();
    if let Err(err) = crosscheck_cli::run(cli) {
        let msg = format!("{:#}", err);
        if json_mode {
            let code = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<Error>())
                .map(Error::code)
                .unwrap_or_else(|| classify_error(&msg));
            emit_error_envelope(code, &msg);
        } else {
            eprintln!("{}", msg);
        }
        std::process::exit(1);
    }
}

fn emit_error_envelope(code: &str, message: &str) {
    let envelope = serde_json::json!({
        "error_code": code,
        "message": message,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&envelope).unwrap_or_default()
    );
}
