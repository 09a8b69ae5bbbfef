mod properties;

use std::sync::Arc;

use crate::scoring::ResponseScorer;
use crate::vocab::WordList;

pub(super) fn test_vocab() -> Arc<WordList> {
    Arc::new(WordList::from_words([
        "the", "cat", "sat", "hat", "mat", "was", "saw", "form", "from", "bad", "bead", "dog",
        "there", "where", "on", "a",
    ]))
}

pub(super) fn test_scorer() -> ResponseScorer {
    ResponseScorer::new(test_vocab())
}

pub(super) fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
