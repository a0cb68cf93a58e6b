//! Request-level error taxonomy
//!
//! Every failure here is terminal for the current request and non-fatal
//! for the process: it becomes a readable message in the UI and the server
//! stays ready for the next input. Nothing is retried.

use thiserror::Error;

pub use crate::llm::ExplainError;
pub use crate::source::FetchError;

/// Terminal failure of one request's pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Empty or whitespace-only input; rejected before any network call.
    #[error("please enter a GitHub URL first")]
    EmptyInput,

    /// The source file could not be fetched.
    #[error("error fetching code: {0}")]
    Fetch(#[from] FetchError),

    /// The fetch succeeded but the explanation call failed. The fetched
    /// code and detected language are kept so the UI can still show them.
    #[error("error generating explanation: {source}")]
    Explain {
        #[source]
        source: ExplainError,
        raw_url: String,
        language: &'static str,
        code: String,
    },
}
