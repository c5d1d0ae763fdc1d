/*
[INPUT]:  Failure sources (configuration, transport, HTTP status, decoding)
[OUTPUT]: Structured error types carrying status code and parsed body context
[POS]:    Error handling layer - unified error types for the entire crate
[UPDATE]: When adding new failure sources or changing the normalized shape
*/

use serde_json::{Map, Value};
use thiserror::Error;

/// Main error type for the Coinpush client
#[derive(Error, Debug)]
pub enum CoinpushError {
    /// Requested API version has no entry in the supported-version table
    #[error("API version {version} is not supported")]
    UnsupportedVersion { version: u32 },

    /// Request reached the wire boundary and failed
    #[error(transparent)]
    Request(#[from] RequestError),

    /// HTTP transport could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding/decoding failed outside the wire boundary
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl CoinpushError {
    /// HTTP status code of a normalized request failure.
    ///
    /// `Some(0)` means the request never received a response (DNS failure,
    /// connection refused, timeout). `None` means the error did not originate
    /// at the wire boundary.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CoinpushError::Request(err) => Some(err.status_code),
            _ => None,
        }
    }

    /// Parsed response body of a normalized request failure
    pub fn response(&self) -> Option<&Map<String, Value>> {
        match self {
            CoinpushError::Request(err) => Some(&err.response),
            _ => None,
        }
    }
}

/// Normalized error for anything that fails at the transport/HTTP boundary.
///
/// `status_code` is 0 when no HTTP response reached the client. `response`
/// holds the decoded error body when the server sent a JSON object; a body
/// that is not a JSON object is kept verbatim under the `contents` key; no
/// body leaves the map empty. The original transport error is retained as
/// `source` for diagnostics.
#[derive(Error, Debug)]
#[error("request failed (status {status_code}): {message}")]
pub struct RequestError {
    pub message: String,
    pub status_code: u16,
    pub response: Map<String, Value>,
    #[source]
    pub source: Option<reqwest::Error>,
}

impl RequestError {
    /// Normalize a transport fault.
    ///
    /// Most transport faults never saw a response, so the status code
    /// defaults to 0; faults that do carry one (reqwest status errors)
    /// keep it.
    pub(crate) fn from_transport(source: reqwest::Error) -> Self {
        Self {
            message: source.to_string(),
            status_code: source.status().map_or(0, |status| status.as_u16()),
            response: Map::new(),
            source: Some(source),
        }
    }
}

/// Result type alias for Coinpush operations
pub type Result<T> = std::result::Result<T, CoinpushError>;
