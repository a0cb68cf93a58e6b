//! Raw content fetching
//!
//! One HTTP GET per invocation: no custom headers, no retries, transport
//! defaults for timeouts. Any non-success status or transport failure is a
//! [`FetchError`] that ends the request's pipeline.

use thiserror::Error;

/// Failure to retrieve source content over HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server responded with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The request never completed (DNS, connection, TLS, or read failure).
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetch the body of `url` as text.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })
}
