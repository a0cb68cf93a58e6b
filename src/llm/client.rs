//! Gemini API client

use crate::config::LlmConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of the generative-text call.
#[derive(Debug, Error)]
pub enum ExplainError {
    /// The API answered with a non-success status (quota, bad key, oversized
    /// request).
    #[error("model API request failed: HTTP {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request never completed, or the response body was not the
    /// expected JSON shape.
    #[error("model API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered successfully but produced no text.
    #[error("model returned no text")]
    EmptyResponse,
}

/// Client for the Gemini generateContent API.
///
/// The model identity is fixed at construction and holds for the process
/// lifetime.
pub struct GeminiClient {
    config: LlmConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new client
    pub fn new(config: LlmConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Request a completion for `prompt` from the configured model.
    pub async fn generate(&self, prompt: &str) -> Result<String, ExplainError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
                temperature: self.config.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExplainError::Api { status, body });
        }

        let result: GenerateContentResponse = response.json().await?;

        result
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or(ExplainError::EmptyResponse)
    }
}

// Gemini generateContent API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: usize,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};

    fn test_config(endpoint: &str) -> LlmConfig {
        LlmConfig {
            endpoint: endpoint.to_string(),
            api_key: "test-key".to_string(),
            ..LlmConfig::default()
        }
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_extracts_first_candidate_text() {
        let app = Router::new().route(
            "/v1beta/models/gemini-2.0-flash:generateContent",
            post(|| async {
                Json(serde_json::json!({
                    "candidates": [
                        { "content": { "parts": [ { "text": "An explanation." } ] } }
                    ]
                }))
            }),
        );
        let base = serve(app).await;

        let client = GeminiClient::new(test_config(&base));
        let text = client.generate("explain this").await.unwrap();
        assert_eq!(text, "An explanation.");
    }

    #[tokio::test]
    async fn test_api_failure_carries_status_and_body() {
        let app = Router::new().route(
            "/v1beta/models/gemini-2.0-flash:generateContent",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
        );
        let base = serve(app).await;

        let client = GeminiClient::new(test_config(&base));
        let err = client.generate("explain this").await.unwrap_err();

        match err {
            ExplainError::Api { status, body } => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert!(body.contains("quota"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let app = Router::new().route(
            "/v1beta/models/gemini-2.0-flash:generateContent",
            post(|| async { Json(serde_json::json!({ "candidates": [] })) }),
        );
        let base = serve(app).await;

        let client = GeminiClient::new(test_config(&base));
        let err = client.generate("explain this").await.unwrap_err();
        assert!(matches!(err, ExplainError::EmptyResponse));
    }
}
