use intro_scorer::scoring::{score_transcript, DisabledScorer, EmbeddingHandle, EngineOptions};
use intro_scorer::settings::{settings, FailurePolicy};
use intro_scorer::utils::{
    log_dimmed, log_generic_error, log_ml_step, log_newline, log_score_report, log_transcript,
};
use std::env;
use std::io::Read;
use std::process;

fn print_usage() {
    eprintln!("Usage: score-transcript [<text>|-] [--json] [--rules-only]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <text>        Transcript to score (reads stdin when omitted or '-')");
    eprintln!("  --json        Print the report as JSON");
    eprintln!("  --rules-only  Skip the embedding model and score with rules alone");
}

fn read_stdin() -> std::io::Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let as_json = args.iter().any(|a| a == "--json");
    let rules_only = args.iter().any(|a| a == "--rules-only");
    let text_args: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json" && *a != "--rules-only")
        .collect();

    let text = if text_args.is_empty() || text_args == ["-"] {
        match read_stdin() {
            Ok(input) => input,
            Err(e) => {
                log_generic_error("[ERROR]", &format!("Failed to read stdin: {e}"));
                process::exit(1);
            }
        }
    } else {
        text_args.join(" ")
    };

    let mut options = EngineOptions::from_settings(settings());

    let result = if rules_only || !settings().semantic.enabled {
        options.on_failure = FailurePolicy::RuleOnly;
        score_transcript(&text, &DisabledScorer, &options).await
    } else {
        if !as_json {
            log_ml_step("Loading models...");
            log_dimmed("└─ This may take a while on first run");
        }
        let handle = match EmbeddingHandle::spawn() {
            Ok(handle) => handle,
            Err(e) => {
                log_generic_error("[ERROR]", &format!("Failed to start embedding worker: {e}"));
                process::exit(1);
            }
        };
        score_transcript(&text, &handle, &options).await
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            log_generic_error("[ERROR]", &format!("Scoring failed ({}): {e}", e.kind()));
            process::exit(2);
        }
    };

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log_generic_error("[ERROR]", &format!("Failed to encode report: {e}"));
                process::exit(1);
            }
        }
    } else {
        log_newline();
        log_transcript(&text);
        log_newline();
        log_score_report(&report);
    }
}
