//! Word tokenization for responses and reference sentences.

use unicode_segmentation::UnicodeSegmentation;

/// Apostrophes that join a possessive or contraction to its word.
fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Split `text` into lowercase, alphanumeric-only word tokens.
///
/// Word units come from UAX #29 word boundaries, so `cat's` and `they're` stay
/// one unit; apostrophes are then folded out (`cats`, `theyre`). Any unit that
/// still contains a non-alphanumeric character (`3.5`, `e.g`) is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .unicode_words()
        .map(|w| w.chars().filter(|&c| !is_apostrophe(c)).collect::<String>())
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphanumeric))
        .collect()
}
