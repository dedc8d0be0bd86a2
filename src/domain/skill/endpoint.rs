//! Connected gadget endpoints as reported by discovery.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EndpointId;

/// One reachable gadget endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    pub endpoint_id: EndpointId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

impl EndpointDescriptor {
    pub fn new(endpoint_id: EndpointId) -> Self {
        Self {
            endpoint_id,
            friendly_name: None,
        }
    }

    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }
}
