//! GitHub URL classification and normalization
//!
//! A user may paste either a GitHub web-UI "blob" URL or a direct
//! raw-content URL. Blob URLs are rewritten to the raw host; anything
//! unrecognized is passed through unchanged and allowed to fail at the
//! fetch stage with a natural HTTP error.

use regex::Regex;
use std::sync::LazyLock;

/// Host that serves repository file bytes directly.
const RAW_HOST: &str = "raw.githubusercontent.com";

static BLOB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // owner, repo and ref contain no slash; the file path may.
    Regex::new(r"^https://github\.com/([^/]+)/([^/]+)/blob/([^/]+)/(.+)$")
        .expect("blob pattern is a valid regex")
});

/// Classification of a user-supplied source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceUrl {
    /// Already addresses raw content; used as-is.
    Raw(String),
    /// GitHub web-UI blob URL, decomposed for rewriting.
    Blob {
        owner: String,
        repo: String,
        /// Branch name or commit hash
        reference: String,
        path: String,
    },
    /// Neither raw nor a recognized blob URL. Deliberate pass-through,
    /// not an error.
    Unrecognized(String),
}

impl SourceUrl {
    /// Classify a URL into one of the three source variants.
    pub fn classify(url: &str) -> Self {
        if url.contains(RAW_HOST) {
            return SourceUrl::Raw(url.to_string());
        }

        if let Some(caps) = BLOB_PATTERN.captures(url) {
            return SourceUrl::Blob {
                owner: caps[1].to_string(),
                repo: caps[2].to_string(),
                reference: caps[3].to_string(),
                path: caps[4].to_string(),
            };
        }

        SourceUrl::Unrecognized(url.to_string())
    }

    /// The URL to fetch for this source.
    pub fn into_raw(self) -> String {
        match self {
            SourceUrl::Raw(url) | SourceUrl::Unrecognized(url) => url,
            SourceUrl::Blob {
                owner,
                repo,
                reference,
                path,
            } => format!("https://{RAW_HOST}/{owner}/{repo}/{reference}/{path}"),
        }
    }
}

/// Convert a GitHub URL to its raw-content equivalent.
///
/// Pure and idempotent: already-raw URLs and unrecognized URLs come back
/// unchanged, and a rewritten blob URL contains the raw host, so a second
/// pass classifies it as raw.
pub fn normalize(url: &str) -> String {
    SourceUrl::classify(url).into_raw()
}
