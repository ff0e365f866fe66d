//! Emotion Detection Module
//!
//! Forwards text to the external emotion classifier and reshapes its answer.
//!
//! # Components
//! - `client.rs`: outbound call and failure handling
//! - `extractor.rs`: locates the five scores in an arbitrary JSON response
//! - `dominant.rs`: picks the highest-scoring emotion
//! - `types.rs`: scores, results and error types

pub mod client;
pub mod dominant;
pub mod extractor;
pub mod types;


pub use client::EmotionDetector;
pub use dominant::dominant;
pub use extractor::find_scores;
pub use types::{
    DetectError, DetectionReport, DetectionResult,
    Emotion, EmotionScores, Outcome,
};
