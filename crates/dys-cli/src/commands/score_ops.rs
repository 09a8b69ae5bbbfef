use dys_core::{aggregate, Settings};
use dys_session::{similarity, AcceptanceGate, GateDecision};

use super::ScorerPaths;
use crate::render;

pub fn score(paths: &ScorerPaths, response: &str, reference: &str, explain: bool) {
    let scorer = die!(paths.load(), "Error: {}");
    let result = die!(scorer.score(response, reference), "Error: {}");
    if explain {
        let json = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{json}");
    } else {
        print!("{}", render::format_score(&result));
    }
}

pub fn aggregate_cmd(scores: &[f64], threshold: Option<f64>, settings: Option<&str>) {
    let threshold = match (threshold, settings) {
        (Some(t), _) => t,
        (None, Some(file)) => {
            let content = die!(std::fs::read_to_string(file), "Error reading {file}: {}");
            let s = die!(
                dys_core::settings::parse_settings_toml(&content),
                "Error: {}"
            );
            s.threshold.verdict
        }
        (None, None) => Settings::default().threshold.verdict,
    };
    let result = aggregate(scores, threshold);
    println!(
        "score={} positive={}/{} threshold={}",
        result.score,
        result.positive_count,
        scores.len(),
        threshold
    );
    println!("{}", result.verdict.message());
}

pub fn similarity_cmd(response: &str, reference: &str, threshold: Option<u8>) {
    let gate = match threshold {
        Some(t) => AcceptanceGate::new(t),
        None => AcceptanceGate::from_settings(&Settings::default()),
    };
    let decision = gate.check(response, reference);
    let label = match decision {
        GateDecision::Exact => "exact",
        GateDecision::Similar { .. } => "accepted",
        GateDecision::Empty => "empty",
        GateDecision::TooDifferent { .. } => "rejected",
    };
    println!(
        "similarity={} threshold={} {label}",
        similarity(response.trim(), reference.trim()),
        gate.threshold()
    );
}
