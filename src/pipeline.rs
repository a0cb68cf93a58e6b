//! The per-request explanation pipeline
//!
//! Four strictly ordered steps: Normalize -> Fetch -> DetectLanguage ->
//! Explain. Each step runs only if the previous one succeeded; the first
//! failure ends the request. Nothing is shared between requests.

use crate::error::PipelineError;
use crate::language;
use crate::llm::{self, GenerateText};
use crate::source::{fetch, url};
use serde::Serialize;
use tracing::debug;

/// Result of a fully successful pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedCode {
    /// The URL the content was actually fetched from
    pub raw_url: String,
    /// Detected language tag
    pub language: &'static str,
    /// The fetched source text
    pub code: String,
    /// Model-generated explanation
    pub explanation: String,
}

/// Run the pipeline for one user-supplied URL.
pub async fn run(
    http: &reqwest::Client,
    generator: &dyn GenerateText,
    input: &str,
) -> Result<ExplainedCode, PipelineError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let raw_url = url::normalize(input);
    debug!(%raw_url, "normalized source URL");

    let code = fetch::fetch(http, &raw_url).await?;

    // Language comes from the URL the user typed, not the fetched body.
    let language = language::detect(input);
    debug!(language, bytes = code.len(), "fetched source");

    match llm::explain(generator, &code, language).await {
        Ok(explanation) => Ok(ExplainedCode {
            raw_url,
            language,
            code,
            explanation,
        }),
        Err(source) => Err(PipelineError::Explain {
            source,
            raw_url,
            language,
            code,
        }),
    }
}
