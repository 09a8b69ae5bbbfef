use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, debug_span, warn};

use crate::catalog::ConfusionCatalog;
use crate::settings::Settings;
use crate::tokenize::tokenize;
use crate::vocab::Vocabulary;

use super::word::{TokenReport, WordScorer};
use super::{round3, ScoreError};

/// Which branch of response scoring produced the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOutcome {
    /// Text equal to the reference ignoring case and surrounding whitespace.
    ExactMatch,
    /// Same token sequence as the reference (differs only in punctuation/spacing).
    TokenMatch,
    /// Averaged over per-token scores.
    Scored,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseScore {
    /// Mean token score rounded to three decimals; 0 for either match outcome.
    pub value: f64,
    pub outcome: ScoreOutcome,
    /// Per-token breakdown. Empty for the match outcomes.
    pub tokens: Vec<TokenReport>,
    /// The reference produced no tokens, so positional checks were skipped.
    pub reference_empty: bool,
}

impl ResponseScore {
    fn matched(outcome: ScoreOutcome) -> Self {
        Self {
            value: 0.0,
            outcome,
            tokens: Vec::new(),
            reference_empty: false,
        }
    }
}

/// Scores typed responses against their reference sentence.
///
/// Holds the vocabulary, catalog and settings behind `Arc`s so one scorer can
/// be shared by many sessions; scoring never mutates any of them.
#[derive(Clone)]
pub struct ResponseScorer {
    vocab: Arc<dyn Vocabulary>,
    catalog: Arc<ConfusionCatalog>,
    settings: Arc<Settings>,
}

impl fmt::Debug for ResponseScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseScorer")
            .field("vocab_len", &self.vocab.len())
            .field("letter_pairs", &self.catalog.letter_pairs().len())
            .field("word_groups", &self.catalog.word_groups().len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl ResponseScorer {
    /// Scorer with the built-in catalog and default settings.
    pub fn new(vocab: Arc<dyn Vocabulary>) -> Self {
        Self {
            vocab,
            catalog: ConfusionCatalog::shared(),
            settings: Arc::new(Settings::default()),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<ConfusionCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_settings(mut self, settings: Arc<Settings>) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &ConfusionCatalog {
        &self.catalog
    }

    pub fn word_scorer(&self) -> WordScorer<'_> {
        WordScorer::new(self.vocab.as_ref(), &self.catalog, &self.settings)
    }

    /// Score `response` against `reference`.
    ///
    /// Fails only when the response is not an exact match and has no word
    /// tokens; an empty reference just disables the positional checks.
    pub fn score(&self, response: &str, reference: &str) -> Result<ResponseScore, ScoreError> {
        let _span = debug_span!("score_response", response, reference).entered();

        if is_exact_match(response, reference) {
            debug!("exact match");
            return Ok(ResponseScore::matched(ScoreOutcome::ExactMatch));
        }

        let response_tokens = tokenize(response);
        if response_tokens.is_empty() {
            return Err(ScoreError::EmptyResponseTokens);
        }

        let reference_tokens = tokenize(reference);
        if response_tokens == reference_tokens {
            debug!("token match");
            return Ok(ResponseScore::matched(ScoreOutcome::TokenMatch));
        }

        let reference_empty = reference_tokens.is_empty();
        if reference_empty {
            warn!("reference has no tokens; skipping transposition and reversal checks");
        }

        let scorer = self.word_scorer();
        let tokens: Vec<TokenReport> = response_tokens
            .iter()
            .map(|token| {
                let report = scorer.score_token(token, &reference_tokens);
                debug!(
                    token = %report.token,
                    score = report.score,
                    penalties = report.penalties.len()
                );
                report
            })
            .collect();

        let sum: f64 = tokens.iter().map(|t| t.score).sum();
        let value = round3(sum / tokens.len() as f64);
        debug!(value, token_count = tokens.len());

        Ok(ResponseScore {
            value,
            outcome: ScoreOutcome::Scored,
            tokens,
            reference_empty,
        })
    }
}

/// Case-insensitive comparison ignoring leading and trailing whitespace.
pub fn is_exact_match(response: &str, reference: &str) -> bool {
    response.trim().to_lowercase() == reference.trim().to_lowercase()
}
