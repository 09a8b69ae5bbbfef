use serde::Serialize;
use tracing::debug;

use super::round3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Indicated,
    NotIndicated,
}

impl Verdict {
    pub fn is_indicated(self) -> bool {
        matches!(self, Self::Indicated)
    }

    /// One-line human-readable verdict.
    pub fn message(self) -> &'static str {
        match self {
            Self::Indicated => "Likelihood of dyslexia detected.",
            Self::NotIndicated => "No significant signs of dyslexia detected.",
        }
    }
}

/// Session-level result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregate {
    /// Mean of the strictly positive response scores, rounded to three decimals.
    pub score: f64,
    pub verdict: Verdict,
    /// How many response scores were above zero. Zero means nothing was
    /// aggregated and `score` is 0.0.
    pub positive_count: usize,
}

/// Reduce response scores to an aggregate score and verdict.
///
/// Scores at or below zero (exact matches, all-clean responses) are left out
/// of the mean. The threshold is inclusive; with no positive scores the verdict
/// is always `NotIndicated`.
pub fn aggregate(scores: &[f64], threshold: f64) -> Aggregate {
    let positive: Vec<f64> = scores.iter().copied().filter(|&s| s > 0.0).collect();
    let score = if positive.is_empty() {
        0.0
    } else {
        round3(positive.iter().sum::<f64>() / positive.len() as f64)
    };
    let verdict = if !positive.is_empty() && score >= threshold {
        Verdict::Indicated
    } else {
        Verdict::NotIndicated
    };
    debug!(
        score,
        positive_count = positive.len(),
        total = scores.len(),
        ?verdict
    );
    Aggregate {
        score,
        verdict,
        positive_count: positive.len(),
    }
}
