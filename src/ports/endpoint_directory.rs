//! Endpoint Directory Port - Interface for discovering connected gadgets.
//!
//! The platform exposes an endpoint enumeration API scoped to the device the
//! conversation is happening on. Implementations return the reachable gadget
//! endpoints in the order the platform reports them.

use async_trait::async_trait;

use crate::domain::skill::{ConversationContext, EndpointDescriptor};

/// Errors that can occur while enumerating endpoints
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Request context is missing {0}")]
    MissingContext(&'static str),

    #[error("Endpoint discovery timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Discovery API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid discovery response: {0}")]
    InvalidResponse(String),
}

/// Port for listing the gadget endpoints connected to the user's device
#[async_trait]
pub trait EndpointDirectory: Send + Sync {
    /// List currently connected endpoints
    ///
    /// # Arguments
    /// * `context` - The conversation context, including platform credentials
    ///
    /// # Returns
    /// Connected endpoints, in platform order (possibly empty)
    ///
    /// # Errors
    /// Returns `DiscoveryError` if the platform cannot be queried
    async fn connected_endpoints(
        &self,
        context: &ConversationContext,
    ) -> Result<Vec<EndpointDescriptor>, DiscoveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_error_missing_context() {
        let err = DiscoveryError::MissingContext("apiAccessToken");
        assert_eq!(err.to_string(), "Request context is missing apiAccessToken");
    }

    #[test]
    fn test_discovery_error_status() {
        let err = DiscoveryError::Status {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("forbidden"));
    }
}
