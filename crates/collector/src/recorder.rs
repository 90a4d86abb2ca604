//! JSON-RPC client for the recorder service.
//!
//! Wraps the recorder's single HTTP endpoint using [`reqwest`]. Any HTTP
//! status is accepted; only the shape of the body decides success.

use std::time::Duration;

use chronolog_core::jsonrpc::JsonRpcRequest;
use serde_json::Value;

/// HTTP client for one recorder endpoint.
pub struct RecorderClient {
    client: reqwest::Client,
    url: String,
}

/// Errors from the forwarding call.
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The recorder answered with something other than a JSON object or array.
    #[error("Recorder returned non-JSON response (status {status})")]
    NonJson {
        /// HTTP status code of the reply.
        status: u16,
    },
}

impl RecorderClient {
    /// Create a client posting to `url`, giving up after `timeout`.
    pub fn new(url: String, timeout: Duration) -> Result<Self, RecorderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send `request` and return the recorder's JSON reply verbatim.
    pub async fn call(&self, request: &JsonRpcRequest) -> Result<Value, RecorderError> {
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        match serde_json::from_slice::<Value>(&body) {
            Ok(value @ (Value::Object(_) | Value::Array(_))) => Ok(value),
            _ => {
                tracing::error!(
                    status,
                    body_len = body.len(),
                    "Recorder returned non-JSON"
                );
                Err(RecorderError::NonJson { status })
            }
        }
    }
}
