//! Acceptance gate: decides whether a typed response is close enough to its
//! reference to be scored at all.

use dys_core::scoring::is_exact_match;
use dys_core::Settings;

/// Outcome of checking one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Matches the reference ignoring case and surrounding whitespace.
    Exact,
    /// Similar enough to score.
    Similar { similarity: u8 },
    /// Nothing typed.
    Empty,
    /// Below the similarity threshold; the user should retry.
    TooDifferent { similarity: u8 },
}

impl GateDecision {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Exact | Self::Similar { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptanceGate {
    threshold: u8,
}

impl AcceptanceGate {
    /// `threshold` is a similarity on a 0-100 scale; values above 100 are clamped.
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: threshold.min(100),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.threshold.similarity)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn check(&self, response: &str, reference: &str) -> GateDecision {
        let response = response.trim();
        if response.is_empty() {
            return GateDecision::Empty;
        }
        if is_exact_match(response, reference) {
            return GateDecision::Exact;
        }
        let similarity = similarity(response, reference.trim());
        if similarity >= self.threshold {
            GateDecision::Similar { similarity }
        } else {
            GateDecision::TooDifferent { similarity }
        }
    }
}

/// Case-insensitive indel similarity, 0-100: twice the longest common
/// subsequence over the combined length. Swapped neighbours cost one matched
/// character, not two substitutions.
pub fn similarity(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    let ratio = (2 * lcs_len(&a, &b)) as f64 / total as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Length of the longest common subsequence, one DP row at a time.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if ca == cb { diag + 1 } else { up.max(row[j]) };
            diag = up;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_bounds() {
        assert_eq!(similarity("The cat sat.", "the CAT sat."), 100);
        assert_eq!(similarity("abc", "xyz"), 0);
        assert_eq!(similarity("", ""), 100);
    }

    #[test]
    fn similarity_counts_common_subsequence() {
        // 9 of 10 characters shared on each side
        assert_eq!(similarity("abcdefghij", "abcdefghiX"), 90);
        // "from" / "form" share "frm"
        assert_eq!(similarity("from", "form"), 75);
        assert_eq!(lcs_len(&['a', 'b', 'c'], &['a', 'c']), 2);
    }

    #[test]
    fn swapped_letters_in_every_word_are_accepted() {
        let gate = AcceptanceGate::new(50);
        assert_eq!(
            gate.check("Teh cta sta no hte amt.", "The cat sat on the mat."),
            GateDecision::Similar { similarity: 74 }
        );
    }

    #[test]
    fn exact_match_is_accepted() {
        let gate = AcceptanceGate::new(50);
        assert_eq!(gate.check(" the cat sat. ", "The cat sat."), GateDecision::Exact);
    }

    #[test]
    fn similar_response_is_accepted() {
        let gate = AcceptanceGate::new(50);
        let decision = gate.check("Teh cat sat.", "The cat sat.");
        assert!(decision.is_accepted());
        assert!(matches!(decision, GateDecision::Similar { similarity } if similarity >= 80));
    }

    #[test]
    fn threshold_is_inclusive() {
        let gate = AcceptanceGate::new(75);
        assert_eq!(
            gate.check("from", "form"),
            GateDecision::Similar { similarity: 75 }
        );
        let strict = AcceptanceGate::new(76);
        assert_eq!(
            strict.check("from", "form"),
            GateDecision::TooDifferent { similarity: 75 }
        );
    }

    #[test]
    fn unrelated_response_is_rejected() {
        let gate = AcceptanceGate::new(50);
        let decision = gate.check("Hello there", "The cat sat on the mat.");
        assert!(!decision.is_accepted());
        assert!(matches!(decision, GateDecision::TooDifferent { .. }));
    }

    #[test]
    fn blank_response_is_empty() {
        let gate = AcceptanceGate::new(0);
        assert_eq!(gate.check("   ", "The cat sat."), GateDecision::Empty);
    }

    #[test]
    fn threshold_from_settings() {
        let gate = AcceptanceGate::from_settings(&Settings::default());
        assert_eq!(gate.threshold(), 50);
        assert_eq!(AcceptanceGate::new(250).threshold(), 100);
    }
}
