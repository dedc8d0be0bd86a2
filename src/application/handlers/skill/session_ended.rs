//! SessionEndedHandler - Acknowledge the platform closing the conversation

use async_trait::async_trait;
use tracing::info;

use crate::application::errors::HandlerError;
use crate::application::router::RequestHandler;
use crate::domain::skill::{SessionState, SkillEvent, SkillRequest, SkillResponse};

/// Handler for session-ended notifications. Produces no speech.
#[derive(Debug, Default)]
pub struct SessionEndedHandler;

impl SessionEndedHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RequestHandler for SessionEndedHandler {
    async fn handle(
        &self,
        request: &SkillRequest,
        _state: &mut SessionState,
    ) -> Result<SkillResponse, HandlerError> {
        if let SkillEvent::SessionEnded { reason } = &request.event {
            info!(reason = %reason, "Session ended");
        }

        Ok(SkillResponse::empty())
    }
}

/// Handler bound to request types the skill does not model.
///
/// Always fails so the exception handler answers with its apology.
#[derive(Debug, Default)]
pub struct UnrecognizedRequestHandler;

impl UnrecognizedRequestHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RequestHandler for UnrecognizedRequestHandler {
    async fn handle(
        &self,
        request: &SkillRequest,
        _state: &mut SessionState,
    ) -> Result<SkillResponse, HandlerError> {
        let request_type = match &request.event {
            SkillEvent::Unrecognized { request_type } => request_type.clone(),
            other => format!("{:?}", other.request_type()),
        };
        Err(HandlerError::Unrecognized(request_type))
    }
}
