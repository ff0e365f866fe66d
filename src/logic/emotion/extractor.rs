//! Score Extractor
//!
//! Locates the emotion scores inside a classifier response of unknown
//! shape. The search is depth-first and returns the first object that
//! carries all five recognized keys with numeric values.

use serde_json::{Map, Value};

use super::types::{Emotion, EmotionScores};
use crate::constants::MAX_SEARCH_DEPTH;

/// Find the first object holding all five emotion scores.
///
/// Object members are visited in document order, array elements in index
/// order. Returns `None` when nothing matches.
pub fn find_scores(value: &Value) -> Option<EmotionScores> {
    search(value, 0)
}

fn search(value: &Value, depth: usize) -> Option<EmotionScores> {
    if depth > MAX_SEARCH_DEPTH {
        tracing::debug!("Score search stopped at depth {}", depth);
        return None;
    }

    match value {
        // An object carrying every key settles its own branch, even when
        // coercion fails
        Value::Object(map) if has_all_keys(map) => scores_in(map),
        Value::Object(map) => map.values().find_map(|v| search(v, depth + 1)),
        Value::Array(items) => items.iter().find_map(|v| search(v, depth + 1)),
        _ => None,
    }
}

fn has_all_keys(map: &Map<String, Value>) -> bool {
    Emotion::ALL.iter().all(|e| map.contains_key(e.as_str()))
}

/// Scores held directly by `map`. `None` if any of them fails to coerce.
fn scores_in(map: &Map<String, Value>) -> Option<EmotionScores> {
    let scores = EmotionScores::try_from_fn(|e| coerce(&map[e.as_str()]));
    if scores.is_none() {
        tracing::debug!("Emotion keys present but not numeric, skipping branch");
    }
    scores
}

/// Numbers and numeric strings. Anything else, or a negative or non-finite
/// value, is rejected.
fn coerce(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    (n.is_finite() && n >= 0.0).then_some(n)
}
