//! Outbound HTTP seam for the Solder client.
//!
//! The bot façade talks to the wire exclusively through the [`Transport`]
//! trait, so the whole call pipeline can be exercised against an in-memory
//! implementation in tests. [`HttpTransport`] is the production
//! implementation, backed by `reqwest`.
//!
//! Timeout policy lives here: the caller sets no deadlines of its own and
//! relies on the transport's per-request timeout.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by the wire itself.
///
/// Reason strings must never embed the request URL — Bot API URLs carry the
/// credential token.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request could not be completed (connect/send failure).
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The request exceeded the transport's timeout.
    #[error("request timed out")]
    Timeout,

    /// The response body was not parseable JSON.
    #[error("response body is not JSON: {0}")]
    InvalidBody(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A completed HTTP exchange: status plus parsed JSON body.
///
/// Non-2xx statuses are *not* errors at this layer — the Bot API serves its
/// error envelope with 4xx statuses, and the layer above needs that body.
#[derive(Debug, Clone)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON response body.
    pub body: Value,
}

impl HttpReply {
    /// Returns whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// How a JSON request reaches the remote API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs an optional JSON body to the URL and returns the parsed reply.
    async fn post_json(&self, url: &str, body: Option<&Value>) -> TransportResult<HttpReply>;
}
