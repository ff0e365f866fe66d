//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To point at a different classifier deployment, only edit this file
//! (or set the matching environment variable).

/// Default emotion classifier endpoint
pub const DEFAULT_CLASSIFIER_URL: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Header carrying the model selector
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

/// Default model selector value
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

/// Default classifier timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Deepest nesting level the score extractor will descend into
pub const MAX_SEARCH_DEPTH: usize = 64;

/// Message rendered when no dominant emotion is available
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get classifier URL from environment or use default
pub fn get_classifier_url() -> String {
    std::env::var("EMOTION_SERVICE_URL")
        .unwrap_or_else(|_| DEFAULT_CLASSIFIER_URL.to_string())
}

/// Get model id from environment or use default
pub fn get_model_id() -> String {
    std::env::var("EMOTION_MODEL_ID")
        .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string())
}

/// Get classifier timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("EMOTION_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
