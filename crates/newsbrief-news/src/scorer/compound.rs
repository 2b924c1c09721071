//! Valence-sum signal with negation, degree adverbs, contrast and emphasis.

use std::collections::HashMap;

use super::lexicon::{is_negator, Token};

/// Scalar applied to a word preceded by a negator within [`LOOKBACK`] tokens.
const NEGATION_SCALAR: f64 = -0.74;
/// Added to the magnitude of an all-caps word when the text mixes cases.
const CAPS_INCREMENT: f64 = 0.733;
/// Magnitude added per `!`, up to four.
const EXCLAMATION_INCREMENT: f64 = 0.292;
/// Magnitude added per `?` when more than one appears, up to three.
const QUESTION_INCREMENT: f64 = 0.18;
/// Normalization constant for `x / sqrt(x^2 + ALPHA)`.
const ALPHA: f64 = 15.0;
const LOOKBACK: usize = 3;
/// Booster effect fades with distance from the modified word.
const BOOSTER_DECAY: [f64; LOOKBACK] = [1.0, 0.95, 0.9];

/// Compound score in `[-1.0, 1.0]`.
pub(crate) fn compound_score(
    text: &str,
    tokens: &[Token<'_>],
    valence: &HashMap<&'static str, f64>,
    boosters: &HashMap<&'static str, f64>,
) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let caps_differ = mixed_case(tokens);
    let mut sentiments = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let word = token.lower.as_str();
        if boosters.contains_key(word) {
            sentiments.push(0.0);
            continue;
        }
        let Some(&base) = valence.get(word) else {
            sentiments.push(0.0);
            continue;
        };

        let mut v = base;
        if caps_differ && is_shouting(token.raw) {
            v += CAPS_INCREMENT.copysign(v);
        }

        for (distance, decay) in BOOSTER_DECAY.iter().enumerate() {
            let Some(prev) = i.checked_sub(distance + 1).map(|j| &tokens[j]) else {
                break;
            };
            if let Some(&scalar) = boosters.get(prev.lower.as_str()) {
                v += scalar * decay * v.signum();
            }
        }

        let window = i.saturating_sub(LOOKBACK)..i;
        if tokens[window].iter().any(|t| is_negator(&t.lower)) {
            v *= NEGATION_SCALAR;
        }

        sentiments.push(v);
    }

    apply_contrast(tokens, &mut sentiments);

    let mut sum: f64 = sentiments.iter().sum();
    if sum != 0.0 {
        sum += punctuation_emphasis(text).copysign(sum);
    }

    normalize(sum)
}

/// Down-weight sentiment before "but" and up-weight what follows it.
fn apply_contrast(tokens: &[Token<'_>], sentiments: &mut [f64]) {
    let Some(pivot) = tokens.iter().position(|t| t.lower == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();
    #[allow(clippy::cast_precision_loss)]
    let mut emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;
    if questions > 1 {
        #[allow(clippy::cast_precision_loss)]
        let q = questions.min(3) as f64;
        emphasis += q * QUESTION_INCREMENT;
    }
    emphasis
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn is_shouting(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() > 1
        && word.chars().all(|c| !c.is_lowercase())
}

/// Emphasis by capitals only counts when some words are shouted and some are not.
fn mixed_case(tokens: &[Token<'_>]) -> bool {
    let shouted = tokens.iter().filter(|t| is_shouting(t.raw)).count();
    shouted > 0 && shouted < tokens.len()
}
