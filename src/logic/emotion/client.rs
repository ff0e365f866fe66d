//! Emotion Classifier Client
//!
//! HTTP client for the external EmotionPredict service. Every failure is
//! folded into an invalid `DetectionResult`; callers always get a value.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use super::dominant::dominant;
use super::extractor::find_scores;
use super::types::{DetectError, DetectionResult, EmotionScores};
use crate::config::ClassifierConfig;
use crate::constants::MODEL_ID_HEADER;

// Request types

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}

/// Emotion classifier client
#[derive(Debug, Clone)]
pub struct EmotionDetector {
    config: ClassifierConfig,
    http_client: reqwest::Client,
}

impl EmotionDetector {
    /// Create new detector
    pub fn new(config: ClassifierConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { config, http_client })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `text`. Never fails: unusable responses yield
    /// `DetectionResult::Invalid`.
    pub async fn detect(&self, text: &str) -> DetectionResult {
        match self.try_detect(text).await {
            Ok(scores) => {
                let dominant = dominant(&scores);
                match dominant {
                    Some(emotion) => tracing::debug!("Dominant emotion: {}", emotion),
                    None => tracing::debug!("All emotion scores are zero"),
                }
                DetectionResult::Scored { scores, dominant }
            }
            Err(reason) => {
                tracing::warn!("Emotion detection failed: {}", reason);
                DetectionResult::invalid(reason)
            }
        }
    }

    /// Classify `text`, reporting why no scores could be produced.
    pub async fn try_detect(&self, text: &str) -> Result<EmotionScores, DetectError> {
        let body = PredictRequest {
            raw_document: RawDocument { text },
        };

        let response = self.http_client
            .post(&self.config.url)
            .header(MODEL_ID_HEADER, &self.config.model_id)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            return Err(DetectError::UpstreamRejected);
        }
        if !status.is_success() {
            // Body may still carry scores; decode it anyway
            tracing::warn!("Classifier answered {}", status);
        }

        let raw = response.text()
            .await
            .map_err(|e| self.transport_error(e))?;

        let payload: Value = serde_json::from_str(&raw)
            .map_err(|e| DetectError::MalformedResponse(e.to_string()))?;

        find_scores(&payload).ok_or(DetectError::ExtractionMiss)
    }

    fn transport_error(&self, err: reqwest::Error) -> DetectError {
        if err.is_timeout() {
            DetectError::Timeout(self.config.timeout_seconds)
        } else {
            DetectError::Transport(err.to_string())
        }
    }
}
