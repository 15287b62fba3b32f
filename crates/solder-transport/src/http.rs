//! `reqwest`-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tracing::trace;

use crate::{HttpReply, Transport, TransportError, TransportResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Production HTTP transport over a shared `reqwest::Client`.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the default 30-second request timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: Option<&Value>) -> TransportResult<HttpReply> {
        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }

        // `without_url` keeps the token-bearing URL out of error text.
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::RequestFailed(e.without_url().to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::InvalidBody(e.without_url().to_string()))?;

        trace!(status, "received HTTP reply");
        Ok(HttpReply { status, body })
    }
}
