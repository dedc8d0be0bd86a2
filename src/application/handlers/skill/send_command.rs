//! SendCommandHandler - Send one custom directive to the bound gadget

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::application::errors::HandlerError;
use crate::application::router::RequestHandler;
use crate::domain::skill::{
    CommandCode, DirectiveBuilder, ResponseBuilder, SessionState, SkillRequest, SkillResponse,
};

/// Handler for a command intent
pub struct SendCommandHandler {
    command: CommandCode,
    directives: Arc<DirectiveBuilder>,
    acknowledgement: Option<String>,
}

impl SendCommandHandler {
    pub fn new(command: CommandCode, directives: Arc<DirectiveBuilder>) -> Self {
        Self {
            command,
            directives,
            acknowledgement: None,
        }
    }

    /// Speak `text` alongside the directive.
    pub fn with_acknowledgement(mut self, text: Option<String>) -> Self {
        self.acknowledgement = text;
        self
    }
}

#[async_trait]
impl RequestHandler for SendCommandHandler {
    async fn handle(
        &self,
        _request: &SkillRequest,
        state: &mut SessionState,
    ) -> Result<SkillResponse, HandlerError> {
        // 1. Resolve the gadget bound at launch
        let endpoint_id = state.endpoint_id()?.clone();

        // 2. Fresh correlation token per send
        let token = state.refresh_token();
        info!(command = %self.command, endpoint_id = %endpoint_id, token = %token, "Sending gadget command");

        // 3. Build the directive and close the conversation
        let directive = self.directives.build(&endpoint_id, self.command);
        let mut response = ResponseBuilder::new()
            .add_directive(directive)
            .set_should_end_session(true);
        if let Some(text) = &self.acknowledgement {
            response = response.speak(text);
        }

        Ok(response.build())
    }
}
