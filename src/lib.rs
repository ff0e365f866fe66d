//! Emotion Detector
//!
//! Web front for an external emotion classification service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     EMOTION DETECTOR                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌───────────────┐   ┌──────────────┐   ┌─────────────────┐  │
//! │  │  HTTP         │   │  Detector    │   │  Extractor      │  │
//! │  │  (Axum)       │──▶│  (reqwest)   │──▶│  + dominant     │  │
//! │  └───────────────┘   └──────┬───────┘   └─────────────────┘  │
//! │                             ▼                                │
//! │                   ┌───────────────────┐                      │
//! │                   │ EmotionPredict API│                      │
//! │                   └───────────────────┘                      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod logic;

use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
use logic::emotion::EmotionDetector;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub detector: Arc<EmotionDetector>,
}

impl AppState {
    pub fn new(config: config::Config, detector: EmotionDetector) -> Self {
        Self {
            config,
            detector: Arc::new(detector),
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing page
        .route("/", get(handlers::pages::index))
        .route("/static/mywebscript.js", get(handlers::pages::script))

        // Detection
        .route(
            "/emotionDetector",
            get(handlers::emotion::detect_text).post(handlers::emotion::detect_text),
        )
        .route("/api/v1/emotions", post(handlers::emotion::detect_json))

        .route("/health", get(handlers::health::check))
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
