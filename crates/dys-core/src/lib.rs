//! Scoring engine for the writing-sample screener.
//!
//! A typed response is compared against the reference sentence it was copied
//! from. Each token picks up penalties for the error patterns in the
//! [`catalog`] and for being out of vocabulary; token scores are averaged per
//! response, and response scores are aggregated into a verdict.

pub mod catalog;
pub mod scoring;
pub mod settings;
pub mod tokenize;
pub mod vocab;

pub use catalog::{ConfusionCatalog, LetterPair, WordGroup};
pub use scoring::{
    aggregate, Aggregate, ResponseScore, ResponseScorer, ScoreError, ScoreOutcome, Verdict,
};
pub use settings::Settings;
pub use tokenize::tokenize;
pub use vocab::{Vocabulary, WordList};
