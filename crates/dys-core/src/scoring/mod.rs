//! Token, response and session-level scoring.
//!
//! `WordScorer` charges penalties to a single token, `ResponseScorer` averages
//! them over one typed response, and `aggregate` reduces the response scores of
//! a session to a final score and verdict.

mod aggregate;
mod response;
#[cfg(test)]
mod tests;
mod word;

pub use aggregate::{aggregate, Aggregate, Verdict};
pub use response::{is_exact_match, ResponseScore, ResponseScorer, ScoreOutcome};
pub use word::{Penalty, PenaltyKind, TokenReport, WordScorer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// The response is not an exact match but contains no word tokens, so
    /// there is nothing to average.
    #[error("response contains no word tokens")]
    EmptyResponseTokens,
}

/// Round to three decimal places, ties to even.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}
