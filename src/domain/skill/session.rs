//! Per-conversation session state.
//!
//! The platform round-trips session attributes with every request, so the
//! state is rebuilt from the inbound envelope, mutated by exactly one
//! handler, and written back into the outbound envelope.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CorrelationToken, EndpointId, ValidationError};

use super::phase::ConversationPhase;

/// Keys of the session attribute map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    EndpointId,
    Token,
}

impl SessionKey {
    /// Returns the attribute name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::EndpointId => "endpointId",
            SessionKey::Token => "token",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when reading or writing session attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStateError {
    #[error("Session attribute '{0}' has not been set")]
    MissingKey(SessionKey),

    #[error("Invalid value for session attribute '{key}': {source}")]
    InvalidValue {
        key: SessionKey,
        #[source]
        source: ValidationError,
    },
}

/// Session attributes of one conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    endpoint_id: Option<EndpointId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<CorrelationToken>,
}

impl SessionState {
    /// Creates empty state for a new conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an attribute by key.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::MissingKey` if the attribute was never set.
    pub fn get(&self, key: SessionKey) -> Result<String, SessionStateError> {
        let value = match key {
            SessionKey::EndpointId => self.endpoint_id.as_ref().map(|id| id.as_str().to_string()),
            SessionKey::Token => self.token.as_ref().map(|t| t.as_str().to_string()),
        };
        value.ok_or(SessionStateError::MissingKey(key))
    }

    /// Writes an attribute by key.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::InvalidValue` if the value fails validation
    /// for that key (e.g. a blank endpoint id).
    pub fn set(&mut self, key: SessionKey, value: impl Into<String>) -> Result<(), SessionStateError> {
        match key {
            SessionKey::EndpointId => {
                let endpoint_id = EndpointId::new(value)
                    .map_err(|source| SessionStateError::InvalidValue { key, source })?;
                self.endpoint_id = Some(endpoint_id);
            }
            SessionKey::Token => self.token = Some(CorrelationToken::from_string(value)),
        }
        Ok(())
    }

    /// Returns the bound endpoint.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::MissingKey` when no launch has bound a gadget
    /// in this conversation yet.
    pub fn endpoint_id(&self) -> Result<&EndpointId, SessionStateError> {
        self.endpoint_id
            .as_ref()
            .ok_or(SessionStateError::MissingKey(SessionKey::EndpointId))
    }

    /// Binds the conversation to a gadget endpoint.
    pub fn bind_endpoint(&mut self, endpoint_id: EndpointId) {
        self.endpoint_id = Some(endpoint_id);
    }

    /// Replaces the correlation token with a fresh one and returns it.
    pub fn refresh_token(&mut self) -> &CorrelationToken {
        self.token.insert(CorrelationToken::generate())
    }

    pub fn token(&self) -> Option<&CorrelationToken> {
        self.token.as_ref()
    }

    /// Returns the conversation phase implied by the stored attributes.
    pub fn phase(&self) -> ConversationPhase {
        if self.endpoint_id.is_some() {
            ConversationPhase::Bound
        } else {
            ConversationPhase::Uninitialized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_attributes() {
        let state = SessionState::new();
        assert_eq!(
            state.get(SessionKey::EndpointId),
            Err(SessionStateError::MissingKey(SessionKey::EndpointId))
        );
        assert_eq!(
            state.get(SessionKey::Token),
            Err(SessionStateError::MissingKey(SessionKey::Token))
        );
        assert_eq!(state.phase(), ConversationPhase::Uninitialized);
    }

    #[test]
    fn set_then_get_returns_value() {
        let mut state = SessionState::new();
        state.set(SessionKey::EndpointId, "E1").unwrap();
        state.set(SessionKey::Token, "tok").unwrap();

        assert_eq!(state.get(SessionKey::EndpointId).unwrap(), "E1");
        assert_eq!(state.get(SessionKey::Token).unwrap(), "tok");
        assert_eq!(state.phase(), ConversationPhase::Bound);
    }

    #[test]
    fn set_rejects_blank_endpoint_id() {
        let mut state = SessionState::new();
        let result = state.set(SessionKey::EndpointId, "  ");

        assert!(matches!(
            result,
            Err(SessionStateError::InvalidValue { key: SessionKey::EndpointId, .. })
        ));
        assert!(state.endpoint_id().is_err());
    }

    #[test]
    fn missing_endpoint_error_names_wire_key() {
        let err = SessionState::new().endpoint_id().unwrap_err();
        assert_eq!(err.to_string(), "Session attribute 'endpointId' has not been set");
    }

    #[test]
    fn refresh_token_replaces_previous_token() {
        let mut state = SessionState::new();
        let first = state.refresh_token().clone();
        let second = state.refresh_token().clone();

        assert_ne!(first, second);
        assert_eq!(state.token(), Some(&second));
    }

    #[test]
    fn serializes_with_wire_attribute_names() {
        let mut state = SessionState::new();
        state.bind_endpoint(EndpointId::new("amzn1.ask.endpoint.X").unwrap());

        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json, serde_json::json!({ "endpointId": "amzn1.ask.endpoint.X" }));
    }

    #[test]
    fn deserializes_from_attribute_map_ignoring_unknown_keys() {
        let json = serde_json::json!({
            "endpointId": "E9",
            "token": "abc",
            "somethingElse": 42
        });

        let state: SessionState = serde_json::from_value(json).unwrap();

        assert_eq!(state.endpoint_id().unwrap().as_str(), "E9");
        assert_eq!(state.token().unwrap().as_str(), "abc");
    }

    #[test]
    fn deserialization_rejects_blank_endpoint_id() {
        let json = serde_json::json!({ "endpointId": "" });
        assert!(serde_json::from_value::<SessionState>(json).is_err());
    }
}
