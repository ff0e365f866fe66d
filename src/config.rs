//! Configuration module

use std::env;
use std::time::Duration;

use crate::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Classifier settings
    pub classifier: ClassifierConfig,

    /// Environment (development, production)
    pub environment: String,
}

/// Settings for the outbound classifier call
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Full URL of the EmotionPredict endpoint
    pub url: String,

    /// Value sent in the model selector header
    pub model_id: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: constants::get_classifier_url(),
            model_id: constants::get_model_id(),
            timeout_seconds: constants::get_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| constants::DEFAULT_HOST.to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(constants::DEFAULT_PORT),

            classifier: ClassifierConfig::default(),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
