//! In-memory endpoint directory for tests and local development.
//!
//! Returns a fixed list of endpoints for every conversation, or a configured
//! error. Every lookup is recorded for verification.
//!
//! # Example
//!
//! ```ignore
//! let directory = InMemoryEndpointDirectory::new()
//!     .with_endpoint(EndpointDescriptor::new(EndpointId::new("E1")?));
//!
//! let endpoints = directory.connected_endpoints(&context).await?;
//! assert_eq!(directory.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::foundation::{ConversationId, EndpointId, ValidationError};
use crate::domain::skill::{ConversationContext, EndpointDescriptor};
use crate::ports::{DiscoveryError, EndpointDirectory};

/// Fixed-answer endpoint directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEndpointDirectory {
    endpoints: Vec<EndpointDescriptor>,
    failure: Option<DiscoveryError>,
    calls: Arc<Mutex<Vec<ConversationId>>>,
}

impl InMemoryEndpointDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from raw endpoint ids, in order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any id is blank.
    pub fn from_endpoint_ids<I, S>(ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let endpoints = ids
            .into_iter()
            .map(|id| EndpointId::new(id).map(EndpointDescriptor::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            endpoints,
            ..Self::default()
        })
    }

    /// Appends an endpoint to the reported list.
    pub fn with_endpoint(mut self, endpoint: EndpointDescriptor) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Makes every lookup fail with `error`.
    pub fn with_failure(mut self, error: DiscoveryError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Number of lookups performed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Conversations that performed a lookup, in call order.
    pub fn calls(&self) -> Vec<ConversationId> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl EndpointDirectory for InMemoryEndpointDirectory {
    async fn connected_endpoints(
        &self,
        context: &ConversationContext,
    ) -> Result<Vec<EndpointDescriptor>, DiscoveryError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(context.conversation_id.clone());

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.endpoints.clone()),
        }
    }
}
