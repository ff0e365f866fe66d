//! HTTP handlers

pub mod health;
pub mod emotion;
pub mod input;
pub mod pages;


use crate::AppError;

/// Fallback for unknown routes
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
