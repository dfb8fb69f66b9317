use console::{measure_text_width, Style};
use std::time::Duration;

use crate::scoring::{CriterionReport, ScoreReport, SemanticStatus};
use crate::settings::FailurePolicy;

pub const TREE_BRANCH: char = '\u{251C}';
pub const TREE_END: char = '\u{2514}';
pub const TREE_HORIZ: char = '\u{2500}';
pub const TREE_VERT: char = '\u{2502}';

const TREE_PREFIX_WIDTH: usize = 4;
const VALUE_COLUMN: usize = 25;

fn tree_branch() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_BRANCH, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_end() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_END, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_indent() -> String {
    dim().apply_to(format!("{}   ", TREE_VERT)).to_string()
}

fn tree_blank() -> String {
    "    ".to_string()
}

pub fn dim() -> Style {
    Style::new().dim()
}

fn blue() -> Style {
    Style::new().blue()
}

fn cyan() -> Style {
    Style::new().cyan()
}

fn green() -> Style {
    Style::new().green()
}

fn red() -> Style {
    Style::new().red()
}

fn yellow() -> Style {
    Style::new().yellow()
}

fn bold() -> Style {
    Style::new().bold()
}

fn init_prefix() -> String {
    blue().apply_to("[INIT]").to_string()
}

fn ml_prefix() -> String {
    yellow().apply_to("[ML]").to_string()
}

fn score_prefix() -> String {
    cyan().apply_to("[SCORE]").to_string()
}

pub fn pad_label(label: &str, depth: usize) -> String {
    let prefix_width = depth * TREE_PREFIX_WIDTH;
    let target_width = VALUE_COLUMN.saturating_sub(prefix_width);
    let current_width = measure_text_width(label);
    if current_width < target_width {
        format!("{}{}", label, " ".repeat(target_width - current_width))
    } else {
        format!("{} ", label)
    }
}

/// Colors a 0-100 score by how healthy it is.
pub fn format_score(score: f64) -> String {
    let style = if score >= 80.0 {
        green()
    } else if score >= 50.0 {
        yellow()
    } else {
        red()
    };
    style.apply_to(format!("{score:.1}")).to_string()
}

pub fn log_startup_config(
    host: &str,
    port: u16,
    semantic_enabled: bool,
    timeout_ms: u64,
    on_failure: FailurePolicy,
) {
    println!(
        "{} starting intro-scorer on {}...",
        init_prefix(),
        cyan().apply_to(format!("{host}:{port}")),
    );
    println!(
        "{} semantic scoring is {} (timeout {}ms, on failure: {:?}).",
        init_prefix(),
        if semantic_enabled {
            green().apply_to("enabled")
        } else {
            yellow().apply_to("disabled")
        },
        timeout_ms,
        on_failure,
    );
}

pub fn log_server_starting(addr: &str) {
    println!(
        "{} listening on {}",
        init_prefix(),
        bold().apply_to(format!("http://{addr}"))
    );
}

pub fn log_settings_rejected(path: &str, error: &str) {
    eprintln!(
        "{} {} {}: {}",
        init_prefix(),
        red().apply_to("ignored settings file"),
        cyan().apply_to(path),
        dim().apply_to(error)
    );
}

pub fn log_ml_step(message: &str) {
    eprintln!("{} {}", ml_prefix(), message);
}

pub fn log_ml_model_loaded(name: &str, seconds: f32) {
    eprintln!(
        "{} {} loaded in {}",
        ml_prefix(),
        bold().apply_to(name),
        dim().apply_to(format!("{seconds:.1}s"))
    );
}

pub fn log_ml_ready() {
    eprintln!("{} models ready!", ml_prefix());
}

pub fn log_ml_error(error: &str) {
    eprintln!("{} {}", ml_prefix(), red().apply_to(error));
}

pub fn log_semantic_fallback(error: &str) {
    eprintln!(
        "{} {} {}",
        score_prefix(),
        yellow().apply_to("semantic unavailable, rule scores only:"),
        dim().apply_to(error)
    );
}

pub fn log_transcript_scored(report: &ScoreReport, elapsed: Duration) {
    let semantic = match report.semantic_status {
        SemanticStatus::Ok => dim().apply_to("semantic ok"),
        SemanticStatus::Unavailable => yellow().apply_to("rules only"),
    };
    println!(
        "{} {} words, overall {} ({}, {})",
        score_prefix(),
        bold().apply_to(report.word_count),
        format_score(report.overall_score),
        semantic,
        dim().apply_to(format!("{}ms", elapsed.as_millis()))
    );
}

pub fn log_request_failed(kind: &str, error: &str) {
    println!(
        "{} {} {}",
        score_prefix(),
        red().apply_to(format!("failed ({kind}):")),
        dim().apply_to(error)
    );
}

pub fn log_generic_error(prefix: &str, error: &str) {
    eprintln!("{} {}", red().apply_to(prefix), error);
}

pub fn log_header(title: &str) {
    println!("{}", bold().apply_to(title));
}

pub fn log_dimmed(message: &str) {
    println!("{}", dim().apply_to(message));
}

pub fn log_newline() {
    println!();
}

pub fn log_transcript(text: &str) {
    log_header("TRANSCRIPT");
    let preview: String = text.chars().take(160).collect();
    let ellipsis = if text.chars().count() > 160 { "..." } else { "" };
    println!("{}{}{}", tree_end(), dim().apply_to(preview), ellipsis);
}

fn criterion_lines(report: &CriterionReport, last: bool) -> Vec<String> {
    let (head, indent) = if last {
        (tree_end(), tree_blank())
    } else {
        (tree_branch(), tree_indent())
    };

    let semantic = report
        .semantic_score
        .map(|s| format!("{s:.1}"))
        .unwrap_or_else(|| "n/a".to_string());

    vec![
        format!(
            "{}{}{} {}",
            head,
            pad_label(&report.criterion.to_string(), 1),
            format_score(report.score),
            dim().apply_to(format!("x{}%", report.weight))
        ),
        format!(
            "{}{}{}{}",
            indent,
            tree_branch(),
            pad_label("rule", 2),
            format_score(report.rule_score)
        ),
        format!(
            "{}{}{}{}",
            indent,
            tree_branch(),
            pad_label("semantic", 2),
            dim().apply_to(semantic)
        ),
        format!(
            "{}{}{}",
            indent,
            tree_end(),
            dim().apply_to(&report.feedback)
        ),
    ]
}

pub fn log_score_report(report: &ScoreReport) {
    let mut lines = vec![format!("{}", bold().apply_to("CRITERIA"))];
    let count = report.criteria.len();
    for (i, criterion) in report.criteria.iter().enumerate() {
        lines.extend(criterion_lines(criterion, i + 1 == count));
    }

    lines.push(String::new());
    lines.push(format!("{}", bold().apply_to("RESULT")));
    lines.push(format!(
        "{}{}{}",
        tree_branch(),
        pad_label("words", 1),
        bold().apply_to(report.word_count)
    ));
    lines.push(format!(
        "{}{}{}",
        tree_branch(),
        pad_label("semantic", 1),
        match report.semantic_status {
            SemanticStatus::Ok => green().apply_to("ok"),
            SemanticStatus::Unavailable => yellow().apply_to("unavailable"),
        }
    ));
    lines.push(format!(
        "{}{}{}",
        tree_end(),
        pad_label("overall", 1),
        format_score(report.overall_score)
    ));

    println!("{}\n", lines.join("\n"));
}
