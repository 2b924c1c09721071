//! Averaged adjective polarity, a second opinion next to the compound signal.

use std::collections::HashMap;

use super::lexicon::{is_negator, Token};

const NEGATION_SCALAR: f64 = -0.5;
/// Tokens a negator stays active for while waiting for a polar word.
const NEGATION_REACH: usize = 3;

/// Mean polarity of the polar words in `tokens`, in `[-1.0, 1.0]`.
///
/// An intensifier multiplies only the word right after it. Texts without
/// polar words score `0.0`.
pub(crate) fn polarity_score(
    tokens: &[Token<'_>],
    polarity: &HashMap<&'static str, f64>,
    intensifiers: &HashMap<&'static str, f64>,
) -> f64 {
    let mut values = Vec::new();
    let mut modifier = 1.0;
    let mut negation_left = 0usize;

    for token in tokens {
        let word = token.lower.as_str();

        if is_negator(word) {
            negation_left = NEGATION_REACH;
            modifier = 1.0;
            continue;
        }
        if let Some(&m) = intensifiers.get(word) {
            modifier = m;
            continue;
        }

        if let Some(&p) = polarity.get(word) {
            let mut v = p * modifier;
            if negation_left > 0 {
                v *= NEGATION_SCALAR;
            }
            values.push(v.clamp(-1.0, 1.0));
            negation_left = 0;
        } else {
            negation_left = negation_left.saturating_sub(1);
        }
        modifier = 1.0;
    }

    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    mean.clamp(-1.0, 1.0)
}
