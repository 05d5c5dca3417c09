use web_client::WebClient;

use crate::operation::{HttpMethod, ZonesOperation};
use crate::{ApiError, Result};

/// A client for executing operations against a play-zones server
///
/// This client bridges the gap between the stateless operation
/// definitions and actual network requests to the server. It uses the
/// web-client crate to handle the underlying HTTP communication.
///
/// # Example
///
/// ```rust,no_run
/// use zones_api::{ZonesClient, GetStateOperation, GetStateRequest};
///
/// let client = ZonesClient::new("http://localhost:9090/spotify");
/// let state = client.execute::<GetStateOperation>(&GetStateRequest)?;
/// println!("{} devices", state.devices.len());
/// # Ok::<(), zones_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ZonesClient {
    web_client: WebClient,
    base_url: String,
}

impl ZonesClient {
    /// Create a new client for the server at `base_url`
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_web_client(base_url, WebClient::new())
    }

    /// Create a client with a custom web client (for advanced use cases)
    ///
    /// Most applications should use `ZonesClient::new()` instead.
    pub fn with_web_client(base_url: impl Into<String>, web_client: WebClient) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            web_client,
            base_url,
        }
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute an operation against the server
    ///
    /// This method takes any operation that implements `ZonesOperation`,
    /// issues the appropriate HTTP request, and parses the response.
    ///
    /// # Arguments
    /// * `request` - The operation request data
    ///
    /// # Returns
    /// The parsed response data or an error
    pub fn execute<Op: ZonesOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let url = format!("{}/{}", self.base_url, Op::PATH);

        let body = match Op::METHOD {
            HttpMethod::Get => self.web_client.get(&url)?,
            HttpMethod::Post => {
                let payload = Op::build_body(request)?.unwrap_or_default();
                self.web_client.post_json(&url, &payload)?
            }
        };

        Op::parse_response(&body)
    }
}
