use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::{VocabError, Vocabulary};

/// A set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse word-per-line text. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, VocabError> {
        let list = Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        if list.words.is_empty() {
            return Err(VocabError::Empty);
        }
        Ok(list)
    }

    pub fn open(path: &Path) -> Result<Self, VocabError> {
        let text = fs::read_to_string(path)?;
        let list = Self::parse(&text)?;
        debug!(path = %path.display(), words = list.words.len(), "loaded word list");
        Ok(list)
    }
}

impl Vocabulary for WordList {
    fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // Tokens arrive lowercased; only fold when the caller passed something else.
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let list = WordList::from_words(["The", "cat", "SAT"]);
        assert!(list.contains("the"));
        assert!(list.contains("THE"));
        assert!(list.contains("sat"));
        assert!(list.contains("Cat"));
        assert!(!list.contains("dog"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn parse_skips_blanks_and_comments() {
        let list = WordList::parse("# english words\n\nalpha\n  beta  \n#gamma\n").unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("alpha"));
        assert!(list.contains("beta"));
        assert!(!list.contains("gamma"));
    }

    #[test]
    fn parse_deduplicates_case_variants() {
        let list = WordList::parse("Word\nword\nWORD\n").unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn error_empty_list() {
        let err = WordList::parse("# nothing here\n\n").unwrap_err();
        assert!(matches!(err, VocabError::Empty));
    }

    #[test]
    fn open_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "was\nsaw\nform\nfrom").unwrap();
        let list = WordList::open(file.path()).unwrap();
        assert_eq!(list.len(), 4);
        assert!(list.contains("from"));
    }

    #[test]
    fn error_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordList::open(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, VocabError::Io(_)));
    }
}
