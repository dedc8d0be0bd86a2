//! Inbound skill events and the conversation context they carry.

use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ConversationId;

/// Coarse request category, used by type-based predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    Launch,
    Intent,
    SessionEnded,
    Unrecognized,
}

/// Why the platform closed the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEndedReason {
    UserInitiated,
    Error,
    ExceededMaxReprompts,
    #[serde(other)]
    Unknown,
}

impl SessionEndedReason {
    /// Parses the platform reason code; unknown codes map to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "USER_INITIATED" => Self::UserInitiated,
            "ERROR" => Self::Error,
            "EXCEEDED_MAX_REPROMPTS" => Self::ExceededMaxReprompts,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserInitiated => "USER_INITIATED",
            Self::Error => "ERROR",
            Self::ExceededMaxReprompts => "EXCEEDED_MAX_REPROMPTS",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SessionEndedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified inbound event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum SkillEvent {
    /// The user opened the skill.
    Launch,
    /// The platform matched an utterance to a named intent.
    IntentMatched { name: String },
    /// The platform closed the conversation.
    SessionEnded { reason: SessionEndedReason },
    /// Any request type this skill does not model.
    Unrecognized { request_type: String },
}

impl SkillEvent {
    /// Returns the coarse request category of this event.
    pub fn request_type(&self) -> RequestType {
        match self {
            SkillEvent::Launch => RequestType::Launch,
            SkillEvent::IntentMatched { .. } => RequestType::Intent,
            SkillEvent::SessionEnded { .. } => RequestType::SessionEnded,
            SkillEvent::Unrecognized { .. } => RequestType::Unrecognized,
        }
    }

    /// Returns the intent name for `IntentMatched` events.
    pub fn intent_name(&self) -> Option<&str> {
        match self {
            SkillEvent::IntentMatched { name } => Some(name),
            _ => None,
        }
    }
}

/// Device and platform descriptor sent with every request.
///
/// The access token authorises calls to the platform's endpoint
/// enumeration API and is never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    pub api_endpoint: String,
    #[serde(skip)]
    pub api_access_token: Secret<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl SystemContext {
    pub fn new(api_endpoint: impl Into<String>, api_access_token: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            api_access_token: Secret::new(api_access_token.into()),
            device_id: None,
            application_id: None,
        }
    }

    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }
}

/// Conversation-scoped context of a request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    pub conversation_id: ConversationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemContext>,
}

impl ConversationContext {
    pub fn new(conversation_id: ConversationId) -> Self {
        Self {
            conversation_id,
            system: None,
        }
    }

    pub fn with_system(mut self, system: SystemContext) -> Self {
        self.system = Some(system);
        self
    }
}

/// One inbound request: the classified event plus its context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub context: ConversationContext,
    pub event: SkillEvent,
}

impl SkillRequest {
    pub fn new(request_id: impl Into<String>, context: ConversationContext, event: SkillEvent) -> Self {
        Self {
            request_id: request_id.into(),
            timestamp: None,
            locale: None,
            context,
            event,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}
