//! Custom interface directives sent to a bound gadget.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{EndpointId, ValidationError};

use super::command::CommandCode;

/// Namespace of the gadget's custom interface.
pub const DEFAULT_GADGET_NAMESPACE: &str = "Custom.ShellRunnerGadget";

/// Every custom interface namespace carries this prefix.
const CUSTOM_NAMESPACE_PREFIX: &str = "Custom.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveHeader {
    pub namespace: String,
    pub name: CommandCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveEndpoint {
    pub endpoint_id: EndpointId,
}

/// One fire-and-forget command addressed to a gadget endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    pub header: DirectiveHeader,
    pub endpoint: DirectiveEndpoint,
    pub payload: Map<String, Value>,
}

impl CommandEnvelope {
    pub fn namespace(&self) -> &str {
        &self.header.namespace
    }

    pub fn name(&self) -> CommandCode {
        self.header.name
    }

    pub fn endpoint_id(&self) -> &EndpointId {
        &self.endpoint.endpoint_id
    }
}

/// Builds command envelopes for one custom interface namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveBuilder {
    namespace: String,
}

impl DirectiveBuilder {
    /// Creates a builder for `namespace`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` unless the namespace is `Custom.<Name>`.
    pub fn new(namespace: impl Into<String>) -> Result<Self, ValidationError> {
        let namespace = namespace.into();
        match namespace.strip_prefix(CUSTOM_NAMESPACE_PREFIX) {
            Some(name) if !name.trim().is_empty() => Ok(Self { namespace }),
            _ => Err(ValidationError::invalid_format(
                "gadget_namespace",
                format!("expected '{}<Name>', got '{}'", CUSTOM_NAMESPACE_PREFIX, namespace),
            )),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Builds the envelope for `command` targeting `endpoint_id`.
    pub fn build(&self, endpoint_id: &EndpointId, command: CommandCode) -> CommandEnvelope {
        CommandEnvelope {
            header: DirectiveHeader {
                namespace: self.namespace.clone(),
                name: command,
            },
            endpoint: DirectiveEndpoint {
                endpoint_id: endpoint_id.clone(),
            },
            payload: Map::new(),
        }
    }
}

impl Default for DirectiveBuilder {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_GADGET_NAMESPACE.to_string(),
        }
    }
}
