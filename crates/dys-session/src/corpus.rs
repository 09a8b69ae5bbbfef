//! Reference sentences for screening attempts.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus contains no sentences")]
    Empty,
}

/// Supplies one reference sentence per attempt.
pub trait SentenceSource {
    fn next_sentence(&mut self) -> Result<String, CorpusError>;
}

/// Sentences read from a line-per-sentence file, drawn at random.
///
/// Draws avoid repeating a sentence until every sentence has been used once.
pub struct SentenceCorpus {
    sentences: Vec<String>,
    used: HashSet<usize>,
    rng: StdRng,
}

impl SentenceCorpus {
    pub fn from_sentences<I, S>(sentences: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sentences: Vec<String> = sentences
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if sentences.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self {
            sentences,
            used: HashSet::new(),
            rng: StdRng::from_entropy(),
        })
    }

    pub fn parse(text: &str) -> Result<Self, CorpusError> {
        Self::from_sentences(text.lines())
    }

    pub fn open(path: &Path) -> Result<Self, CorpusError> {
        let corpus = Self::parse(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), sentences = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// Replace the random source with a seeded one for reproducible draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }
}

impl SentenceSource for SentenceCorpus {
    fn next_sentence(&mut self) -> Result<String, CorpusError> {
        if self.used.len() >= self.sentences.len() {
            self.used.clear();
        }
        let index = (0..self.sentences.len())
            .filter(|i| !self.used.contains(i))
            .choose(&mut self.rng)
            .ok_or(CorpusError::Empty)?;
        self.used.insert(index);
        Ok(self.sentences[index].clone())
    }
}
