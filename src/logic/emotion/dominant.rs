//! Dominant-emotion policy

use super::types::{Emotion, EmotionScores};

/// Emotion with the greatest score.
///
/// Ties go to the earliest emotion in canonical order. Returns `None` when
/// every score is zero.
pub fn dominant(scores: &EmotionScores) -> Option<Emotion> {
    if scores.is_all_zero() {
        return None;
    }

    let mut best: Option<(Emotion, f64)> = None;
    for (emotion, score) in scores.iter() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((emotion, score)),
        }
    }

    best.map(|(emotion, _)| emotion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> EmotionScores {
        EmotionScores { anger, disgust, fear, joy, sadness }
    }

    #[test]
    fn test_joy_dominant() {
        assert_eq!(dominant(&scores(0.0, 0.0, 0.0, 0.9, 0.1)), Some(Emotion::Joy));
    }

    #[test]
    fn test_each_emotion_can_win() {
        for (i, expected) in Emotion::ALL.into_iter().enumerate() {
            let s = EmotionScores::try_from_fn(|e| {
                Some(if e == expected { 0.7 } else { 0.05 * i as f64 })
            })
            .unwrap();
            assert_eq!(dominant(&s), Some(expected));
        }
    }

    #[test]
    fn test_tie_goes_to_canonical_order() {
        assert_eq!(dominant(&scores(0.1, 0.4, 0.4, 0.4, 0.1)), Some(Emotion::Disgust));
        assert_eq!(dominant(&scores(0.0, 0.0, 0.0, 0.5, 0.5)), Some(Emotion::Joy));
    }

    #[test]
    fn test_all_zero_has_no_dominant() {
        assert_eq!(dominant(&EmotionScores::default()), None);
    }

    #[test]
    fn test_deterministic() {
        let s = scores(0.3, 0.3, 0.1, 0.2, 0.3);
        let first = dominant(&s);
        for _ in 0..10 {
            assert_eq!(dominant(&s), first);
        }
        assert_eq!(first, Some(Emotion::Anger));
    }
}
