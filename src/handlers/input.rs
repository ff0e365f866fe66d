//! Text input extraction for the detector endpoint
//!
//! Looks for the text in the query string (`textToAnalyze`), then a form
//! body (`textToAnalyze`, urlencoded or multipart), then a JSON body
//! (`text`). The first non-empty
//! value wins; otherwise the text is empty.

use std::convert::Infallible;

use axum::extract::{FromRequest, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::Deserialize;

const TEXT_FIELD: &str = "textToAnalyze";

#[derive(Debug, Default, Deserialize)]
struct TextField {
    #[serde(rename = "textToAnalyze")]
    text_to_analyze: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct JsonText {
    text: Option<String>,
}

/// Text submitted for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeInput(pub String);

#[axum::async_trait]
impl<S> FromRequest<S> for AnalyzeInput
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let from_query = Query::<TextField>::try_from_uri(req.uri())
            .ok()
            .and_then(|Query(field)| non_empty(field.text_to_analyze));
        if let Some(text) = from_query {
            return Ok(Self(text));
        }

        let content_type = req.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let from_body = if content_type.starts_with("application/x-www-form-urlencoded") {
            Form::<TextField>::from_request(req, state)
                .await
                .ok()
                .and_then(|Form(field)| field.text_to_analyze)
        } else if content_type.starts_with("multipart/form-data") {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => multipart_text(multipart).await,
                Err(_) => None,
            }
        } else if content_type.starts_with("application/json") {
            Json::<JsonText>::from_request(req, state)
                .await
                .ok()
                .and_then(|Json(body)| body.text)
        } else {
            None
        };

        Ok(Self(non_empty(from_body).unwrap_or_default()))
    }
}

/// First `textToAnalyze` part of a multipart body
async fn multipart_text(mut multipart: Multipart) -> Option<String> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some(TEXT_FIELD) {
            return field.text().await.ok();
        }
    }
    None
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request};

    async fn extract(req: Request<Body>) -> String {
        let AnalyzeInput(text) = AnalyzeInput::from_request(req, &()).await.unwrap();
        text
    }

    fn post(uri: &str, content_type: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_query_param() {
        let req = Request::builder()
            .uri("/emotionDetector?textToAnalyze=I%20love%20this")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract(req).await, "I love this");
    }

    #[tokio::test]
    async fn test_form_field() {
        let req = post("/emotionDetector", "application/x-www-form-urlencoded", "textToAnalyze=so+sad");
        assert_eq!(extract(req).await, "so sad");
    }

    #[tokio::test]
    async fn test_multipart_field() {
        let body = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"other\"\r\n\r\n\
            ignored\r\n\
            --XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"textToAnalyze\"\r\n\r\n\
            I am so sad about this\r\n\
            --XBOUNDARY--\r\n";
        let req = post("/emotionDetector", "multipart/form-data; boundary=XBOUNDARY", body);
        assert_eq!(extract(req).await, "I am so sad about this");
    }

    #[tokio::test]
    async fn test_json_field() {
        let req = post("/emotionDetector", "application/json", r#"{"text": "I am afraid"}"#);
        assert_eq!(extract(req).await, "I am afraid");
    }

    #[tokio::test]
    async fn test_query_beats_body() {
        let req = post(
            "/emotionDetector?textToAnalyze=from+query",
            "application/x-www-form-urlencoded",
            "textToAnalyze=from+form",
        );
        assert_eq!(extract(req).await, "from query");
    }

    #[tokio::test]
    async fn test_empty_query_falls_back_to_body() {
        let req = post("/emotionDetector?textToAnalyze=", "application/json", r#"{"text": "fallback"}"#);
        assert_eq!(extract(req).await, "fallback");
    }

    #[tokio::test]
    async fn test_nothing_supplied() {
        let req = Request::builder().uri("/emotionDetector").body(Body::empty()).unwrap();
        assert_eq!(extract(req).await, "");

        let req = post("/emotionDetector", "application/json", "not json");
        assert_eq!(extract(req).await, "");
    }
}
