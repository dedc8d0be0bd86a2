//! ApologyErrorHandler - The single fallback for failed handlers

use tracing::error;

use crate::application::errors::HandlerError;
use crate::application::router::ErrorHandler;
use crate::domain::skill::{ResponseBuilder, SkillRequest, SkillResponse};

/// Logs the failure and apologises. The conversation is closed.
pub struct ApologyErrorHandler {
    apology: String,
}

impl ApologyErrorHandler {
    pub fn new(apology: impl Into<String>) -> Self {
        Self {
            apology: apology.into(),
        }
    }
}

impl ErrorHandler for ApologyErrorHandler {
    fn handle(&self, request: &SkillRequest, err: &HandlerError) -> SkillResponse {
        error!(
            request_id = %request.request_id,
            request_type = ?request.event.request_type(),
            error = %err,
            "Handler failed"
        );

        ResponseBuilder::new()
            .speak(&self.apology)
            .set_should_end_session(true)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConversationId;
    use crate::domain::skill::{ConversationContext, SessionKey, SessionStateError, SkillEvent};

    #[test]
    fn test_apology_closes_session_without_directives() {
        let context = ConversationContext::new(ConversationId::new("session-1").unwrap());
        let request = SkillRequest::new(
            "req-1",
            context,
            SkillEvent::IntentMatched { name: "TVOffIntent".into() },
        );
        let err = HandlerError::SessionState(SessionStateError::MissingKey(SessionKey::EndpointId));

        let response = ApologyErrorHandler::new("sorry").handle(&request, &err);

        assert_eq!(response.speech.as_deref(), Some("sorry"));
        assert!(response.ends_session());
        assert!(response.directives.is_empty());
    }
}
