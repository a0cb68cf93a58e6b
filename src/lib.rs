//! gitexplain - AI-powered explanations for GitHub-hosted source files
//!
//! This library provides the core request pipeline: normalizing a GitHub
//! "blob" URL to its raw-content form, fetching the file, detecting its
//! language from the filename, and asking a generative-text model for a
//! high-level explanation. A thin web layer serves the UI and runs the
//! pipeline per request.

pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod llm;
pub mod pipeline;
pub mod source;
pub mod web;

/// Re-export commonly used types
pub use config::{AppConfig, LlmConfig};
pub use error::{ExplainError, FetchError, PipelineError};
pub use pipeline::ExplainedCode;
pub use source::SourceUrl;

/// Application-wide error type
pub use anyhow::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "gitexplain";
