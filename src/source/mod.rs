//! Source URL handling and content retrieval
//!
//! This module handles:
//! - Classifying user URLs (already-raw, GitHub blob, unrecognized)
//! - Rewriting blob URLs to their raw-content equivalents
//! - Fetching the raw file body over HTTP

pub mod fetch;
pub mod url;

pub use fetch::{fetch, FetchError};
pub use url::{normalize, SourceUrl};
