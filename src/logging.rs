//! Logging setup
//!
//! Logs go to stderr so `analyze` can print its report on stdout.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::Config;

const DEFAULT_FILTER: &str = "emotion_detector=debug,tower_http=debug";

/// Install the global subscriber. JSON lines in production, text otherwise.
pub fn init(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt_layer(config.is_production(), std::io::stderr))
        .init();
}

/// Formatting layer writing to `writer`
pub fn fmt_layer<S, W>(json: bool, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        tracing_subscriber::fmt::layer().json().with_writer(writer).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(writer).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture_with(json: bool) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::registry()
            .with(fmt_layer(json, move || writer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("Emotion detection failed: classifier down");
        });
        capture.contents()
    }

    #[test]
    fn test_text_layer_uses_given_writer() {
        let out = capture_with(false);
        assert!(out.contains("WARN"), "{}", out);
        assert!(out.contains("classifier down"), "{}", out);
    }

    #[test]
    fn test_json_layer_uses_given_writer() {
        let out = capture_with(true);
        let line: serde_json::Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
        assert_eq!(line["level"], "WARN");
    }
}
