//! Emotion Detection Types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// EMOTION
// ============================================================================

/// One of the five recognized emotion categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// Canonical order. Tie-breaks and rendering follow it.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    /// Key used by the classifier response and by our output
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown emotion: {}", s))
    }
}

// ============================================================================
// SCORES
// ============================================================================

/// Score for every recognized emotion. All five are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    /// Build scores by asking `f` for each emotion in canonical order.
    /// Stops at the first `None`.
    pub fn try_from_fn<F>(mut f: F) -> Option<Self>
    where
        F: FnMut(Emotion) -> Option<f64>,
    {
        Some(Self {
            anger: f(Emotion::Anger)?,
            disgust: f(Emotion::Disgust)?,
            fear: f(Emotion::Fear)?,
            joy: f(Emotion::Joy)?,
            sadness: f(Emotion::Sadness)?,
        })
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// Scores in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    pub fn is_all_zero(&self) -> bool {
        self.iter().all(|(_, score)| score == 0.0)
    }
}

// ============================================================================
// DETECTION ERRORS
// ============================================================================

/// Why a detection could not produce scores
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// Connection refused, DNS failure, TLS error, ...
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Classifier did not answer within the configured timeout
    #[error("Classifier timed out after {0}s")]
    Timeout(u64),

    /// Classifier answered 400 (input it cannot parse)
    #[error("Classifier rejected the input")]
    UpstreamRejected,

    /// Response body was not JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON had no object carrying all five emotion keys
    #[error("No emotion scores found in response")]
    ExtractionMiss,
}

// ============================================================================
// DETECTION RESULT
// ============================================================================

/// Outcome of a single detection request
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionResult {
    /// Classifier produced usable scores. `dominant` is `None` when every
    /// score is zero.
    Scored {
        scores: EmotionScores,
        dominant: Option<Emotion>,
    },
    /// Classifier call or its response was unusable
    Invalid { reason: DetectError },
}

/// Coarse classification of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Dominant,
    NoDominant,
    Invalid,
}

impl DetectionResult {
    pub fn invalid(reason: DetectError) -> Self {
        DetectionResult::Invalid { reason }
    }

    pub fn scores(&self) -> Option<&EmotionScores> {
        match self {
            DetectionResult::Scored { scores, .. } => Some(scores),
            DetectionResult::Invalid { .. } => None,
        }
    }

    pub fn dominant(&self) -> Option<Emotion> {
        match self {
            DetectionResult::Scored { dominant, .. } => *dominant,
            DetectionResult::Invalid { .. } => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            DetectionResult::Scored { dominant: Some(_), .. } => Outcome::Dominant,
            DetectionResult::Scored { dominant: None, .. } => Outcome::NoDominant,
            DetectionResult::Invalid { .. } => Outcome::Invalid,
        }
    }

    /// Serializable view of this result
    pub fn report(&self) -> DetectionReport {
        let score = |e: Emotion| self.scores().map(|s| s.get(e));

        DetectionReport {
            anger: score(Emotion::Anger),
            disgust: score(Emotion::Disgust),
            fear: score(Emotion::Fear),
            joy: score(Emotion::Joy),
            sadness: score(Emotion::Sadness),
            dominant_emotion: self.dominant(),
            outcome: self.outcome(),
        }
    }
}

/// Structured rendering of a `DetectionResult`.
///
/// Invalid results carry `null` in every score and in `dominant_emotion`;
/// an all-zero scoring carries real zeros and a `null` dominant emotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionReport {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
    pub dominant_emotion: Option<Emotion>,
    pub outcome: Outcome,
}
