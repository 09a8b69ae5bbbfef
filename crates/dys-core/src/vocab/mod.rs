//! Vocabulary lookup.
//!
//! `Vocabulary` answers whether a token is a recognized word. `WordList`
//! is the standard implementation, a case-folded set built from a plain
//! word-per-line file. An unknown word is a scoring signal, never an error.

mod word_list;

pub use word_list::WordList;

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("word list contains no words")]
    Empty,
}

pub trait Vocabulary: Send + Sync {
    /// Case-insensitive membership test.
    fn contains(&self, word: &str) -> bool;

    /// Number of distinct words known to this vocabulary.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
