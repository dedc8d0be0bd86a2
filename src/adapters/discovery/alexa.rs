//! Alexa endpoint enumeration - Implementation of EndpointDirectory.
//!
//! Calls `GET {apiEndpoint}/v1/endpoints` with the request's access token as
//! a bearer credential. The API base URL and token both come from the
//! request's system context; the base URL can be overridden for testing
//! against a local stub.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AlexaDirectoryConfig::new()
//!     .with_timeout(Duration::from_secs(5));
//!
//! let directory = AlexaEndpointDirectory::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::foundation::EndpointId;
use crate::domain::skill::{ConversationContext, EndpointDescriptor};
use crate::ports::{DiscoveryError, EndpointDirectory};

const ENDPOINTS_PATH: &str = "/v1/endpoints";

/// Configuration for the Alexa endpoint directory.
#[derive(Debug, Clone)]
pub struct AlexaDirectoryConfig {
    /// Request timeout for a single enumeration call.
    pub timeout: Duration,
    /// Replaces the API base URL reported by the request context.
    pub api_endpoint_override: Option<String>,
}

impl Default for AlexaDirectoryConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            api_endpoint_override: None,
        }
    }
}

impl AlexaDirectoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_endpoint_override(mut self, url: impl Into<String>) -> Self {
        self.api_endpoint_override = Some(url.into());
        self
    }
}

/// Endpoint directory backed by the platform's enumeration API.
pub struct AlexaEndpointDirectory {
    config: AlexaDirectoryConfig,
    client: Client,
}

impl AlexaEndpointDirectory {
    /// Creates the directory and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::Network` if the HTTP client cannot be built.
    pub fn new(config: AlexaDirectoryConfig) -> Result<Self, DiscoveryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DiscoveryError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the enumeration URL from the override or the context's base URL.
    fn endpoints_url(&self, api_endpoint: &str) -> String {
        let base = self
            .config
            .api_endpoint_override
            .as_deref()
            .unwrap_or(api_endpoint);
        format!("{}{}", base.trim_end_matches('/'), ENDPOINTS_PATH)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> DiscoveryError {
        if e.is_timeout() {
            DiscoveryError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            DiscoveryError::Network(format!("Connection failed: {}", e))
        } else {
            DiscoveryError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl EndpointDirectory for AlexaEndpointDirectory {
    async fn connected_endpoints(
        &self,
        context: &ConversationContext,
    ) -> Result<Vec<EndpointDescriptor>, DiscoveryError> {
        let system = context
            .system
            .as_ref()
            .ok_or(DiscoveryError::MissingContext("system"))?;
        let token = system.api_access_token.expose_secret();
        if token.is_empty() {
            return Err(DiscoveryError::MissingContext("apiAccessToken"));
        }

        let url = self.endpoints_url(&system.api_endpoint);
        debug!(url = %url, "Enumerating connected endpoints");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(DiscoveryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let listing: EndpointListing = response
            .json()
            .await
            .map_err(|e| DiscoveryError::InvalidResponse(e.to_string()))?;

        Ok(listing.into_descriptors())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// API wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct EndpointListing {
    #[serde(default)]
    endpoints: Vec<EndpointEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EndpointEntry {
    endpoint_id: String,
    #[serde(default)]
    friendly_name: Option<String>,
}

impl EndpointListing {
    /// Converts entries in platform order; entries with a blank id are skipped.
    fn into_descriptors(self) -> Vec<EndpointDescriptor> {
        self.endpoints
            .into_iter()
            .filter_map(|entry| match EndpointId::new(entry.endpoint_id) {
                Ok(endpoint_id) => {
                    let descriptor = EndpointDescriptor::new(endpoint_id);
                    Some(match entry.friendly_name {
                        Some(name) => descriptor.with_friendly_name(name),
                        None => descriptor,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Skipping endpoint listing entry");
                    None
                }
            })
            .collect()
    }
}
