//! Request handlers

use super::AppContext;
use crate::error::PipelineError;
use crate::pipeline::{self, ExplainedCode};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The single-page UI, embedded at compile time.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "version": crate::VERSION }))
}

/// Request body for `POST /api/explain`.
#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub url: String,
}

/// Error payload for a failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    /// Present when the fetch succeeded but the explanation failed, so the
    /// code can still be shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_url: Option<String>,
}

/// Run the explanation pipeline for one URL.
pub async fn explain(
    State(ctx): State<AppContext>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainedCode>, Response> {
    match pipeline::run(&ctx.http, ctx.generator.as_ref(), &request.url).await {
        Ok(result) => Ok(Json(result)),
        Err(error) => {
            warn!(%error, "explain request failed");
            Err(error_response(error))
        }
    }
}

fn error_response(error: PipelineError) -> Response {
    let status = match &error {
        PipelineError::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Fetch(_) | PipelineError::Explain { .. } => StatusCode::BAD_GATEWAY,
    };

    let body = match error {
        PipelineError::Explain {
            source,
            raw_url,
            language,
            code,
        } => ErrorBody {
            error: format!("error generating explanation: {source}"),
            code: Some(code),
            language: Some(language),
            raw_url: Some(raw_url),
        },
        other => ErrorBody {
            error: other.to_string(),
            code: None,
            language: None,
            raw_url: None,
        },
    };

    (status, Json(body)).into_response()
}
