//! Confusion catalog: letter pairs and word groups used as scoring signals.
//!
//! The built-in catalog is parsed once from `default_catalog.toml` and shared
//! as `&'static`. A custom catalog parsed with `parse_catalog_toml` can be held
//! in an `Arc` and shared the same way; nothing mutates a catalog after load.

use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::settings::LetterConfusionMode;

pub const DEFAULT_CATALOG_TOML: &str = include_str!("default_catalog.toml");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("letter_pairs is empty")]
    NoLetterPairs,
    #[error("word_groups is empty")]
    NoWordGroups,
    #[error("letter pair {index}: {value:?} is not a single character")]
    NotALetter { index: usize, value: String },
    #[error("word group {index}: needs at least two non-empty members")]
    ShortGroup { index: usize },
}

#[derive(Deserialize)]
struct CatalogConfig {
    letter_pairs: Vec<(String, String)>,
    word_groups: Vec<Vec<String>>,
}

/// An unordered pair of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterPair {
    pub first: char,
    pub second: char,
}

impl LetterPair {
    pub fn new(first: char, second: char) -> Self {
        Self { first, second }
    }

    /// Whether `token` shows this pair under the given matching mode.
    pub fn matches(&self, token: &str, mode: LetterConfusionMode) -> bool {
        match mode {
            LetterConfusionMode::CoOccurrence => {
                token.contains(self.first) && token.contains(self.second)
            }
            LetterConfusionMode::Adjacent => {
                let chars: Vec<char> = token.chars().collect();
                chars.windows(2).any(|w| {
                    (w[0] == self.first && w[1] == self.second)
                        || (w[0] == self.second && w[1] == self.first)
                })
            }
        }
    }
}

/// A group of mutually confusable words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub members: Vec<String>,
}

impl WordGroup {
    /// True when every member occurs as a substring of `token`.
    ///
    /// For single-word tokens this rarely holds; groups with a repeated
    /// member (`here`/`here`) are the exception.
    pub fn all_within(&self, token: &str) -> bool {
        self.members.iter().all(|m| token.contains(m.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionCatalog {
    letter_pairs: Vec<LetterPair>,
    word_groups: Vec<WordGroup>,
}

impl ConfusionCatalog {
    pub fn new(letter_pairs: Vec<LetterPair>, word_groups: Vec<WordGroup>) -> Self {
        Self {
            letter_pairs,
            word_groups,
        }
    }

    fn builtin_arc() -> &'static Arc<ConfusionCatalog> {
        static INSTANCE: OnceLock<Arc<ConfusionCatalog>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Arc::new(
                parse_catalog_toml(DEFAULT_CATALOG_TOML)
                    .expect("default catalog TOML must be valid"),
            )
        })
    }

    /// The embedded default catalog.
    pub fn builtin() -> &'static ConfusionCatalog {
        Self::builtin_arc()
    }

    /// A handle to the same embedded catalog `builtin()` returns.
    pub fn shared() -> Arc<ConfusionCatalog> {
        Arc::clone(Self::builtin_arc())
    }

    pub fn letter_pairs(&self) -> &[LetterPair] {
        &self.letter_pairs
    }

    pub fn word_groups(&self) -> &[WordGroup] {
        &self.word_groups
    }
}

/// Returns the embedded default catalog TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_CATALOG_TOML
}

pub fn parse_catalog_toml(toml_str: &str) -> Result<ConfusionCatalog, CatalogError> {
    let config: CatalogConfig =
        toml::from_str(toml_str).map_err(|e| CatalogError::Parse(e.to_string()))?;

    if config.letter_pairs.is_empty() {
        return Err(CatalogError::NoLetterPairs);
    }
    if config.word_groups.is_empty() {
        return Err(CatalogError::NoWordGroups);
    }

    let mut letter_pairs = Vec::with_capacity(config.letter_pairs.len());
    for (index, (a, b)) in config.letter_pairs.iter().enumerate() {
        letter_pairs.push(LetterPair::new(
            single_letter(index, a)?,
            single_letter(index, b)?,
        ));
    }

    let mut word_groups = Vec::with_capacity(config.word_groups.len());
    for (index, members) in config.word_groups.into_iter().enumerate() {
        if members.len() < 2 || members.iter().any(String::is_empty) {
            return Err(CatalogError::ShortGroup { index });
        }
        word_groups.push(WordGroup { members });
    }

    Ok(ConfusionCatalog::new(letter_pairs, word_groups))
}

fn single_letter(index: usize, value: &str) -> Result<char, CatalogError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CatalogError::NotALetter {
            index,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_is_the_builtin_instance() {
        let a = ConfusionCatalog::shared();
        let b = ConfusionCatalog::shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(std::ptr::eq(a.as_ref(), ConfusionCatalog::builtin()));
    }

    #[test]
    fn parse_default_toml() {
        let catalog = parse_catalog_toml(DEFAULT_CATALOG_TOML).unwrap();
        assert_eq!(catalog.letter_pairs().len(), 20);
        assert_eq!(catalog.word_groups().len(), 43);
        assert_eq!(catalog.letter_pairs()[0], LetterPair::new('b', 'd'));
        assert_eq!(catalog.letter_pairs()[19], LetterPair::new('m', 'n'));
        assert_eq!(
            catalog.word_groups()[12].members,
            vec!["there", "their", "they're"]
        );
    }

    #[test]
    fn builtin_is_shared() {
        let a = ConfusionCatalog::builtin();
        let b = ConfusionCatalog::builtin();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn members_are_kept_verbatim() {
        let catalog = ConfusionCatalog::builtin();
        assert!(catalog
            .word_groups()
            .iter()
            .any(|g| g.members == vec!["for", " four"]));
    }

    #[test]
    fn co_occurrence_ignores_position() {
        let pair = LetterPair::new('b', 'd');
        assert!(pair.matches("bad", LetterConfusionMode::CoOccurrence));
        assert!(pair.matches("dab", LetterConfusionMode::CoOccurrence));
        assert!(!pair.matches("bat", LetterConfusionMode::CoOccurrence));
    }

    #[test]
    fn adjacent_needs_touching_letters() {
        let pair = LetterPair::new('a', 'e');
        assert!(pair.matches("read", LetterConfusionMode::Adjacent));
        assert!(pair.matches("bae", LetterConfusionMode::Adjacent));
        assert!(!pair.matches("table", LetterConfusionMode::Adjacent));
        assert!(pair.matches("table", LetterConfusionMode::CoOccurrence));
    }

    #[test]
    fn word_group_requires_every_member() {
        let group = WordGroup {
            members: vec!["here".into(), "hear".into()],
        };
        assert!(!group.all_within("here"));
        assert!(group.all_within("hereandhear"));

        let repeated = WordGroup {
            members: vec!["here".into(), "here".into()],
        };
        assert!(repeated.all_within("there"));
    }

    #[test]
    fn error_multi_char_letter() {
        let toml = r#"
letter_pairs = [["b", "dd"]]
word_groups = [["was", "saw"]]
"#;
        let err = parse_catalog_toml(toml).unwrap_err();
        assert!(matches!(err, CatalogError::NotALetter { index: 0, .. }));
    }

    #[test]
    fn error_single_member_group() {
        let toml = r#"
letter_pairs = [["b", "d"]]
word_groups = [["was", "saw"], ["alone"]]
"#;
        let err = parse_catalog_toml(toml).unwrap_err();
        assert!(matches!(err, CatalogError::ShortGroup { index: 1 }));
    }

    #[test]
    fn error_empty_tables() {
        let err = parse_catalog_toml("letter_pairs = []\nword_groups = [[\"a\", \"b\"]]\n")
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoLetterPairs));
        let err = parse_catalog_toml("letter_pairs = [[\"a\", \"b\"]]\nword_groups = []\n")
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoWordGroups));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_catalog_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
