//! Explanation generation via an external generative-text model
//!
//! This module handles:
//! - Building the fixed explanation prompt
//! - Calling the Gemini generateContent API
//! - A mockable seam over the model for tests

mod client;
mod prompts;

pub use client::{ExplainError, GeminiClient};
pub use prompts::explanation_prompt;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Seam over the generative-text service, so the pipeline can be
/// exercised without network access.
#[async_trait]
pub trait GenerateText: Send + Sync {
    /// Generate text for a prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ExplainError>;
}

#[async_trait]
impl GenerateText for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ExplainError> {
        GeminiClient::generate(self, prompt).await
    }
}

/// Request an explanation of `code`, tagged as `language`, from the model.
pub async fn explain(
    generator: &dyn GenerateText,
    code: &str,
    language: &str,
) -> Result<String, ExplainError> {
    let prompt = explanation_prompt(code, language);
    generator.generate(&prompt).await
}

/// Mock generator for testing
pub struct MockGenerator {
    response: Option<String>,
    calls: AtomicUsize,
}

impl MockGenerator {
    /// Always answers with `text`.
    pub fn with_response(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails, simulating a model outage.
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of generate calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerateText for MockGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, ExplainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(ExplainError::EmptyResponse),
        }
    }
}
