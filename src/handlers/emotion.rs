//! Emotion detection handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::constants::INVALID_TEXT_MESSAGE;
use crate::handlers::input::AnalyzeInput;
use crate::logic::emotion::{DetectionReport, DetectionResult};
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    #[serde(default)]
    pub text: String,
}

/// Plain-text detector endpoint used by the landing page
pub async fn detect_text(
    State(state): State<AppState>,
    AnalyzeInput(text): AnalyzeInput,
) -> impl IntoResponse {
    let result = state.detector.detect(&text).await;

    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_sentence(&result),
    )
}

/// Structured detector endpoint
pub async fn detect_json(
    State(state): State<AppState>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> AppResult<Json<DetectionReport>> {
    let Json(req) = payload?;
    let result = state.detector.detect(&req.text).await;

    Ok(Json(result.report()))
}

/// Human-readable sentence for a result. Any result without a dominant
/// emotion renders the invalid-text message.
pub fn render_sentence(result: &DetectionResult) -> String {
    let (Some(s), Some(dominant)) = (result.scores(), result.dominant()) else {
        return INVALID_TEXT_MESSAGE.to_string();
    };

    // `{:?}` keeps the decimal point on whole numbers (0.0, not 0)
    format!(
        "For the given statement, the system response is \
         'anger': {:?}, 'disgust': {:?}, 'fear': {:?}, 'joy': {:?} and 'sadness': {:?}. \
         The dominant emotion is {}.",
        s.anger, s.disgust, s.fear, s.joy, s.sadness, dominant
    )
}
