use thiserror::Error;

/// Failure to retrieve a response body over HTTP.
///
/// Both variants carry the requested URL; the cause lives in the source
/// chain. Non-2xx statuses are not an error at this layer — the body is
/// still handed to the parser.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to send request to {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A weather payload that could not be interpreted.
///
/// Carries the underlying JSON error so callers decide how to render it
/// instead of intercepting a panic or a thrown failure.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ParseError(#[from] serde_json::Error);
