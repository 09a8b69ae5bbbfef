use serde::Serialize;

use crate::catalog::ConfusionCatalog;
use crate::settings::Settings;
use crate::vocab::Vocabulary;

/// What a penalty was charged for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PenaltyKind {
    UnknownWord,
    LetterConfusion { first: char, second: char },
    /// Index into `ConfusionCatalog::word_groups`.
    WordConfusion { group: usize },
    Transposition,
    Reversal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Penalty {
    #[serde(flatten)]
    pub kind: PenaltyKind,
    pub weight: f64,
}

/// Score of one token with the penalties that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenReport {
    pub token: String,
    pub penalties: Vec<Penalty>,
    /// Sum of penalty weights, or minus the clean-token reward when that sum is zero.
    pub score: f64,
    /// The reference consisted of exactly this token; scored 0 with no reward.
    pub matched_reference: bool,
}

impl TokenReport {
    pub fn is_clean(&self) -> bool {
        !self.matched_reference && self.penalties.is_empty()
    }
}

/// Scores single tokens against the tokens of a reference sentence.
///
/// Only the first reference token takes part in the transposition and
/// reversal checks.
pub struct WordScorer<'a> {
    vocab: &'a dyn Vocabulary,
    catalog: &'a ConfusionCatalog,
    settings: &'a Settings,
}

impl<'a> WordScorer<'a> {
    pub fn new(
        vocab: &'a dyn Vocabulary,
        catalog: &'a ConfusionCatalog,
        settings: &'a Settings,
    ) -> Self {
        Self {
            vocab,
            catalog,
            settings,
        }
    }

    pub fn score_token(&self, token: &str, reference: &[String]) -> TokenReport {
        if reference.len() == 1 && reference[0] == token {
            return TokenReport {
                token: token.to_string(),
                penalties: Vec::new(),
                score: 0.0,
                matched_reference: true,
            };
        }

        let weights = &self.settings.penalty;
        let mut penalties = Vec::new();

        if !self.vocab.contains(token) {
            penalties.push(Penalty {
                kind: PenaltyKind::UnknownWord,
                weight: weights.unknown_word,
            });
        }

        let mode = self.settings.scoring.letter_mode;
        for pair in self.catalog.letter_pairs() {
            if pair.matches(token, mode) {
                penalties.push(Penalty {
                    kind: PenaltyKind::LetterConfusion {
                        first: pair.first,
                        second: pair.second,
                    },
                    weight: weights.letter_confusion,
                });
            }
        }

        for (group, members) in self.catalog.word_groups().iter().enumerate() {
            if members.all_within(token) {
                penalties.push(Penalty {
                    kind: PenaltyKind::WordConfusion { group },
                    weight: weights.word_confusion,
                });
            }
        }

        if let Some(first) = reference.first() {
            if is_adjacent_transposition(token, first) {
                penalties.push(Penalty {
                    kind: PenaltyKind::Transposition,
                    weight: weights.transposition,
                });
            }
            if token.chars().rev().eq(first.chars()) {
                penalties.push(Penalty {
                    kind: PenaltyKind::Reversal,
                    weight: weights.reversal,
                });
            }
        }

        let total: f64 = penalties.iter().map(|p| p.weight).sum();
        let score = if total == 0.0 {
            -weights.clean_token_reward
        } else {
            total
        };

        TokenReport {
            token: token.to_string(),
            penalties,
            score,
            matched_reference: false,
        }
    }
}

/// True if `token` equals `target` with one pair of adjacent characters swapped.
///
/// A doubled letter swaps onto itself, so `book` is a transposition of `book`.
fn is_adjacent_transposition(token: &str, target: &str) -> bool {
    let token: Vec<char> = token.chars().collect();
    let target: Vec<char> = target.chars().collect();
    if token.len() != target.len() {
        return false;
    }
    (0..target.len().saturating_sub(1)).any(|i| {
        token[i] == target[i + 1]
            && token[i + 1] == target[i]
            && token[..i] == target[..i]
            && token[i + 2..] == target[i + 2..]
    })
}
