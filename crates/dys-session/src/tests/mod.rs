
use std::collections::VecDeque;
use std::sync::Arc;

use dys_core::{ResponseScorer, WordList};

use crate::corpus::{CorpusError, SentenceSource};
use crate::ScreeningSession;

/// Hands out a fixed list of sentences, then fails.
pub(super) struct ScriptedSource {
    sentences: VecDeque<String>,
}

impl ScriptedSource {
    pub(super) fn new(sentences: &[&str]) -> Self {
        Self {
            sentences: sentences.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SentenceSource for ScriptedSource {
    fn next_sentence(&mut self) -> Result<String, CorpusError> {
        self.sentences.pop_front().ok_or(CorpusError::Empty)
    }
}

pub(super) fn make_test_scorer() -> ResponseScorer {
    let vocab = WordList::from_words([
        "the", "cat", "sat", "was", "saw", "form", "from", "a", "dog",
    ]);
    ResponseScorer::new(Arc::new(vocab))
}

pub(super) fn make_session(
    sentences: &[&str],
    attempts: usize,
) -> ScreeningSession<ScriptedSource> {
    ScreeningSession::new(ScriptedSource::new(sentences), make_test_scorer(), attempts).unwrap()
}
