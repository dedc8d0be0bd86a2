//! Request/response envelopes exchanged with the voice platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::domain::skill::{
    CommandEnvelope, ConversationContext, SessionEndedReason, SessionState, SkillEvent, SkillRequest,
    SkillResponse, SystemContext,
};

/// Envelope version emitted on every response.
pub const RESPONSE_VERSION: &str = "1.0";

/// Directive type wrapping custom interface commands.
pub const SEND_DIRECTIVE_TYPE: &str = "CustomInterfaceController.SendDirective";

// ════════════════════════════════════════════════════════════════════════════
// Request envelope
// ════════════════════════════════════════════════════════════════════════════

/// Inbound skill request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub session: Option<SessionDto>,
    #[serde(default)]
    pub context: Option<ContextDto>,
    pub request: RequestDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub session_id: String,
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default)]
    pub application: Option<ApplicationDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextDto {
    #[serde(rename = "System", default)]
    pub system: Option<SystemDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemDto {
    #[serde(default)]
    pub api_endpoint: String,
    #[serde(default)]
    pub api_access_token: Option<String>,
    #[serde(default)]
    pub device: Option<DeviceDto>,
    #[serde(default)]
    pub application: Option<ApplicationDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    pub device_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    #[serde(rename = "type")]
    pub request_type: String,
    pub request_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentDto>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentDto {
    pub name: String,
}

impl RequestEnvelope {
    /// The skill this envelope is addressed to, preferring the system context.
    pub fn application_id(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|c| c.system.as_ref())
            .and_then(|s| s.application.as_ref())
            .or_else(|| self.session.as_ref().and_then(|s| s.application.as_ref()))
            .map(|a| a.application_id.as_str())
    }

    /// Classifies the request and rebuilds the session state it carries.
    ///
    /// Requests outside a session use the request id as conversation id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` with `MalformedRequest` if an intent request has
    /// no intent or the session attributes are invalid, and a validation code
    /// for blank identifiers.
    pub fn into_domain(self) -> Result<(SkillRequest, SessionState), DomainError> {
        let event = classify(&self.request)?;

        let (conversation_id, attributes) = match self.session {
            Some(session) => (session.session_id, session.attributes),
            None => (self.request.request_id.clone(), None),
        };
        let conversation_id = ConversationId::new(conversation_id)?;

        let state = match attributes {
            Some(attributes) => serde_json::from_value(Value::Object(attributes)).map_err(|e| {
                DomainError::new(ErrorCode::MalformedRequest, "Invalid session attributes")
                    .with_detail("reason", e.to_string())
            })?,
            None => SessionState::new(),
        };

        let mut context = ConversationContext::new(conversation_id);
        if let Some(system) = self.context.and_then(|c| c.system) {
            context = context.with_system(system.into_domain());
        }

        let RequestDto {
            request_id,
            timestamp,
            locale,
            ..
        } = self.request;
        let mut request = SkillRequest::new(request_id, context, event);
        if let Some(timestamp) = timestamp {
            request = request.with_timestamp(timestamp);
        }
        if let Some(locale) = locale {
            request = request.with_locale(locale);
        }

        Ok((request, state))
    }
}

impl SystemDto {
    fn into_domain(self) -> SystemContext {
        let mut system =
            SystemContext::new(self.api_endpoint, self.api_access_token.unwrap_or_default());
        if let Some(device) = self.device {
            system = system.with_device_id(device.device_id);
        }
        if let Some(application) = self.application {
            system = system.with_application_id(application.application_id);
        }
        system
    }
}

fn classify(request: &RequestDto) -> Result<SkillEvent, DomainError> {
    match request.request_type.as_str() {
        "LaunchRequest" => Ok(SkillEvent::Launch),
        "IntentRequest" => {
            let intent = request.intent.as_ref().ok_or_else(|| {
                DomainError::new(ErrorCode::MalformedRequest, "Intent request without intent")
                    .with_detail("field", "request.intent")
            })?;
            Ok(SkillEvent::IntentMatched {
                name: intent.name.clone(),
            })
        }
        "SessionEndedRequest" => Ok(SkillEvent::SessionEnded {
            reason: SessionEndedReason::from_code(request.reason.as_deref().unwrap_or_default()),
        }),
        other => Ok(SkillEvent::Unrecognized {
            request_type: other.to_string(),
        }),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response envelope
// ════════════════════════════════════════════════════════════════════════════

/// Outbound skill response envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub session_attributes: SessionState,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<DirectiveDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectiveDto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(flatten)]
    pub envelope: CommandEnvelope,
}

impl ResponseEnvelope {
    /// Wraps a dispatch outcome; `None` becomes an empty response body.
    pub fn new(response: Option<SkillResponse>, state: SessionState) -> Self {
        Self {
            version: RESPONSE_VERSION,
            session_attributes: state,
            response: response.map(ResponseBody::from).unwrap_or_default(),
        }
    }
}

impl From<SkillResponse> for ResponseBody {
    fn from(response: SkillResponse) -> Self {
        Self {
            output_speech: response.speech.map(|text| OutputSpeech {
                kind: "PlainText",
                text,
            }),
            should_end_session: response.should_end_session,
            directives: response
                .directives
                .into_iter()
                .map(|envelope| DirectiveDto {
                    kind: SEND_DIRECTIVE_TYPE,
                    envelope,
                })
                .collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = (!err.details.is_empty()).then(|| {
            Value::Object(
                err.details
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect(),
            )
        });
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}
