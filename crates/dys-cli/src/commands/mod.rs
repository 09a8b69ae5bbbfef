use std::fs;
use std::path::Path;
use std::sync::Arc;

use dys_core::catalog::{parse_catalog_toml, CatalogError};
use dys_core::settings::{parse_settings_toml, SettingsError};
use dys_core::vocab::VocabError;
use dys_core::{ResponseScorer, WordList};
use tracing::debug;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod score_ops;
pub mod session_ops;

/// Paths that make up a scorer. Only the word list is required.
#[derive(Debug, Clone, Default)]
pub struct ScorerPaths {
    pub words: String,
    pub settings: Option<String>,
    pub catalog: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("word list {path}: {source}")]
    Vocab { path: String, source: VocabError },

    #[error("settings {path}: {source}")]
    Settings {
        path: String,
        source: SettingsError,
    },

    #[error("catalog {path}: {source}")]
    Catalog { path: String, source: CatalogError },
}

fn read(path: &str) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_string(),
        source,
    })
}

impl ScorerPaths {
    pub fn load(&self) -> Result<ResponseScorer, LoadError> {
        debug!(
            words = %self.words,
            settings = ?self.settings,
            catalog = ?self.catalog,
            "loading scorer"
        );
        let vocab = WordList::open(Path::new(&self.words)).map_err(|source| LoadError::Vocab {
            path: self.words.clone(),
            source,
        })?;
        let mut scorer = ResponseScorer::new(Arc::new(vocab));

        if let Some(path) = &self.settings {
            let settings = parse_settings_toml(&read(path)?).map_err(|source| {
                LoadError::Settings {
                    path: path.clone(),
                    source,
                }
            })?;
            scorer = scorer.with_settings(Arc::new(settings));
        }
        if let Some(path) = &self.catalog {
            let catalog = parse_catalog_toml(&read(path)?).map_err(|source| {
                LoadError::Catalog {
                    path: path.clone(),
                    source,
                }
            })?;
            scorer = scorer.with_catalog(Arc::new(catalog));
        }
        Ok(scorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        fs::write(&words, "the\ncat\n").unwrap();
        let settings = dir.path().join("settings.toml");
        let custom = dys_core::settings::default_toml().replace("verdict = 3.5", "verdict = 1.0");
        fs::write(&settings, custom).unwrap();

        let scorer = ScorerPaths {
            words: words.display().to_string(),
            settings: Some(settings.display().to_string()),
            catalog: None,
        }
        .load()
        .unwrap();
        assert_eq!(scorer.settings().threshold.verdict, 1.0);
        assert_eq!(scorer.catalog().letter_pairs().len(), 20);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ScorerPaths {
            words: "/nonexistent/words.txt".to_string(),
            ..Default::default()
        }
        .load()
        .unwrap_err();
        assert!(matches!(err, LoadError::Vocab { .. }));
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
