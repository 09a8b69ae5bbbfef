//! Scoring settings loaded from TOML.
//!
//! - `parse_settings_toml(toml_content)` parses and validates caller-supplied settings
//! - `default_settings()` returns `&'static Settings` (lazy-init from the embedded TOML)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Settings are passed to the scorers explicitly, so callers can override any
//! weight or threshold without touching process-wide state.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Get or initialize the embedded default settings.
pub fn default_settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub penalty: PenaltySettings,
    pub threshold: ThresholdSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
}

impl Default for Settings {
    fn default() -> Self {
        default_settings().clone()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PenaltySettings {
    pub unknown_word: f64,
    pub letter_confusion: f64,
    pub word_confusion: f64,
    pub transposition: f64,
    pub reversal: f64,
    pub clean_token_reward: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThresholdSettings {
    /// Acceptance-gate similarity on a 0-100 scale.
    pub similarity: u8,
    /// Inclusive lower bound of an "indicated" aggregate score.
    pub verdict: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub letter_mode: LetterConfusionMode,
}

/// How a letter pair is matched against a token.
///
/// `CoOccurrence` is the calibrated rule: both letters anywhere in the token,
/// regardless of position. `Adjacent` requires the two letters to touch, which
/// is closer to an actual swap but shifts every score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterConfusionMode {
    #[default]
    CoOccurrence,
    Adjacent,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_nan() || s.$section.$field < 0.0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be a non-negative number".to_string(),
                });
            }
        };
    }

    check_non_negative!(penalty.unknown_word);
    check_non_negative!(penalty.letter_confusion);
    check_non_negative!(penalty.word_confusion);
    check_non_negative!(penalty.transposition);
    check_non_negative!(penalty.reversal);
    check_non_negative!(penalty.clean_token_reward);
    check_non_negative!(threshold.verdict);

    if s.threshold.similarity > 100 {
        return Err(SettingsError::InvalidValue {
            field: "threshold.similarity".to_string(),
            reason: "must be in 0..=100".to_string(),
        });
    }

    Ok(())
}
