//! Invariants that hold for any input.

use proptest::prelude::*;

use super::test_scorer;
use crate::scoring::{aggregate, ScoreOutcome, Verdict};

fn arb_sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "the", "cat", "sat", "was", "saw", "form", "from", "bad", "there", "xqzzt", "Dog,",
            "hat.", "it's", "!",
        ]),
        0..8,
    )
    .prop_map(|words| words.join(" "))
}

#[test]
fn scoring_is_idempotent() {
    let scorer = test_scorer();
    let first = scorer.score("saw teh bad cat", "was the cat").unwrap();
    let second = scorer.score("saw teh bad cat", "was the cat").unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn repeated_scoring_agrees(response in arb_sentence(), reference in arb_sentence()) {
        let scorer = test_scorer();
        prop_assert_eq!(
            scorer.score(&response, &reference),
            scorer.score(&response, &reference)
        );
    }

    #[test]
    fn scored_value_is_rounded_mean(response in arb_sentence(), reference in arb_sentence()) {
        let scorer = test_scorer();
        if let Ok(score) = scorer.score(&response, &reference) {
            if score.outcome == ScoreOutcome::Scored {
                let sum: f64 = score.tokens.iter().map(|t| t.score).sum();
                let mean = sum / score.tokens.len() as f64;
                prop_assert!((score.value - mean).abs() <= 0.0005 + 1e-9);
                prop_assert!(score.value >= -0.3);
            } else {
                prop_assert_eq!(score.value, 0.0);
            }
        }
    }

    #[test]
    fn aggregate_is_zero_or_positive(scores in prop::collection::vec(-5.0f64..20.0, 0..6)) {
        let result = aggregate(&scores, 3.5);
        prop_assert!(result.score >= 0.0);
        if result.positive_count == 0 {
            prop_assert_eq!(result.score, 0.0);
            prop_assert_eq!(result.verdict, Verdict::NotIndicated);
        }
    }
}
