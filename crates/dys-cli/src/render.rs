//! Plain-text rendering of scores and session reports.

use dys_core::scoring::{Penalty, PenaltyKind, TokenReport};
use dys_core::{ResponseScore, ScoreOutcome};
use dys_session::{AttemptRecord, SessionReport};
use unicode_width::UnicodeWidthStr;

const TOKEN_COLUMN: usize = 14;

/// Pad `s` with spaces to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}

fn outcome_label(outcome: ScoreOutcome) -> &'static str {
    match outcome {
        ScoreOutcome::ExactMatch => "exact match",
        ScoreOutcome::TokenMatch => "token match",
        ScoreOutcome::Scored => "scored",
    }
}

fn penalty_label(penalty: &Penalty) -> String {
    match &penalty.kind {
        PenaltyKind::UnknownWord => "unknown word".to_string(),
        PenaltyKind::LetterConfusion { first, second } => format!("letters {first}/{second}"),
        PenaltyKind::WordConfusion { group } => format!("word group #{group}"),
        PenaltyKind::Transposition => "transposition".to_string(),
        PenaltyKind::Reversal => "reversal".to_string(),
    }
}

fn format_token(token: &TokenReport) -> String {
    let labels: Vec<String> = token.penalties.iter().map(penalty_label).collect();
    let note = if token.matched_reference {
        "matches reference".to_string()
    } else {
        labels.join(", ")
    };
    format!(
        "  {} {:>+6.2}  {}",
        pad(&token.token, TOKEN_COLUMN),
        token.score,
        note
    )
    .trim_end()
    .to_string()
}

/// Score line followed by one line per token.
pub fn format_score(score: &ResponseScore) -> String {
    let mut out = format!("score={} ({})\n", score.value, outcome_label(score.outcome));
    if score.reference_empty {
        out.push_str("  reference has no words; positional checks skipped\n");
    }
    for token in &score.tokens {
        out.push_str(&format_token(token));
        out.push('\n');
    }
    out
}

/// One line for an accepted attempt.
pub fn format_attempt(record: &AttemptRecord, max_attempts: usize) -> String {
    format!(
        "Attempt {}/{}: score={} ({})",
        record.attempt,
        max_attempts,
        record.score.value,
        outcome_label(record.score.outcome)
    )
}

/// End-of-session summary: each attempt, the aggregate and the verdict.
pub fn format_summary(report: &SessionReport) -> String {
    let meta = &report.metadata;
    let mut out = format!(
        "=== Screening summary: {} ({}) ===\nStarted: {}\n",
        meta.subject_name, meta.subject_id, meta.started_at
    );

    let width = report
        .attempts
        .iter()
        .map(|a| UnicodeWidthStr::width(a.response.as_str()))
        .max()
        .unwrap_or(0);
    for a in &report.attempts {
        out.push_str(&format!(
            "  #{:<2} {}  score={}\n",
            a.attempt,
            pad(&a.response, width),
            a.score.value
        ));
    }
    if report.attempts.is_empty() {
        out.push_str("  No responses were scored.\n");
    }

    out.push_str(&format!(
        "Aggregate: {} ({} of {} responses above zero, threshold {})\n",
        report.aggregate.score,
        report.aggregate.positive_count,
        report.attempts.len(),
        report.verdict_threshold
    ));
    out.push_str(report.aggregate.verdict.message());
    out.push('\n');
    out
}
