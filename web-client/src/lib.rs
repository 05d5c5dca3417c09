//! Private HTTP client for play-zones endpoint communication
//!
//! This crate provides a minimal HTTP client specifically designed for
//! talking to the play-zones web service, which exposes JSON documents
//! over plain GET and POST endpoints.

mod error;

pub use error::WebError;

use std::time::Duration;

/// A minimal HTTP client for JSON endpoint communication
#[derive(Debug, Clone)]
pub struct WebClient {
    agent: ureq::Agent,
}

impl WebClient {
    /// Create a new web client with default configuration
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
        }
    }

    /// Issue a GET request and return the response body
    ///
    /// Any non-success status is reported as `WebError::Status`;
    /// transport failures are `WebError::Network`.
    pub fn get(&self, url: &str) -> Result<String, WebError> {
        let response = self.agent.get(url).call().map_err(map_ureq_error)?;

        response
            .into_string()
            .map_err(|e| WebError::Network(e.to_string()))
    }

    /// POST a JSON body and return the response body
    ///
    /// Sets `Content-Type: application/json`. The body is sent as-is;
    /// serialization is the caller's concern.
    pub fn post_json(&self, url: &str, body: &str) -> Result<String, WebError> {
        let response = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_string(body)
            .map_err(map_ureq_error)?;

        response
            .into_string()
            .map_err(|e| WebError::Network(e.to_string()))
    }
}

impl Default for WebClient {
    fn default() -> Self {
        Self::new()
    }
}

fn map_ureq_error(error: ureq::Error) -> WebError {
    match error {
        ureq::Error::Status(code, _) => WebError::Status(code),
        ureq::Error::Transport(transport) => WebError::Network(transport.to_string()),
    }
}
