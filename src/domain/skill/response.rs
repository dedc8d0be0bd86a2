//! Outbound skill responses and the builder handlers assemble them with.

use serde::Serialize;

use super::directive::CommandEnvelope;

/// The single response produced for one dispatched request.
///
/// `should_end_session` is `None` when the platform default applies
/// (e.g. the response to a session-ended notification).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
    pub directives: Vec<CommandEnvelope>,
}

impl SkillResponse {
    /// A response with no speech, no directives and no session flag.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the response explicitly closes the conversation.
    pub fn ends_session(&self) -> bool {
        self.should_end_session == Some(true)
    }
}

/// Accumulates the pieces of a response.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: SkillResponse,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.response.speech = Some(text.into());
        self
    }

    pub fn set_should_end_session(mut self, end: bool) -> Self {
        self.response.should_end_session = Some(end);
        self
    }

    pub fn add_directive(mut self, directive: CommandEnvelope) -> Self {
        self.response.directives.push(directive);
        self
    }

    pub fn build(self) -> SkillResponse {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EndpointId;
    use crate::domain::skill::{CommandCode, DirectiveBuilder};

    #[test]
    fn empty_response_leaves_session_flag_unset() {
        let response = SkillResponse::empty();
        assert_eq!(response.should_end_session, None);
        assert!(!response.ends_session());
        assert!(response.directives.is_empty());
    }

    #[test]
    fn builder_accumulates_all_parts() {
        let directive = DirectiveBuilder::default()
            .build(&EndpointId::new("E1").unwrap(), CommandCode::TvOn);

        let response = ResponseBuilder::new()
            .speak("Hecho")
            .set_should_end_session(true)
            .add_directive(directive.clone())
            .build();

        assert_eq!(response.speech.as_deref(), Some("Hecho"));
        assert!(response.ends_session());
        assert_eq!(response.directives, vec![directive]);
    }

    #[test]
    fn serialization_skips_unset_fields() {
        let json = serde_json::to_value(SkillResponse::empty()).unwrap();
        assert_eq!(json, serde_json::json!({ "directives": [] }));
    }
}
