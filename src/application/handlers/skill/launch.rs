//! LaunchHandler - Bind the conversation to the first connected gadget

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::application::errors::HandlerError;
use crate::application::router::RequestHandler;
use crate::domain::skill::{ResponseBuilder, SessionState, SkillRequest, SkillResponse};
use crate::ports::EndpointDirectory;

/// Handler for launch requests
pub struct LaunchHandler {
    directory: Arc<dyn EndpointDirectory>,
    launch_speech: String,
    no_gadgets_speech: String,
}

impl LaunchHandler {
    pub fn new(
        directory: Arc<dyn EndpointDirectory>,
        launch_speech: impl Into<String>,
        no_gadgets_speech: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            launch_speech: launch_speech.into(),
            no_gadgets_speech: no_gadgets_speech.into(),
        }
    }
}

#[async_trait]
impl RequestHandler for LaunchHandler {
    async fn handle(
        &self,
        request: &SkillRequest,
        state: &mut SessionState,
    ) -> Result<SkillResponse, HandlerError> {
        info!(conversation_id = %request.context.conversation_id, "== Launch ==");

        // 1. Discover connected gadgets; a failed lookup counts as none
        let endpoints = match self.directory.connected_endpoints(&request.context).await {
            Ok(endpoints) => endpoints,
            Err(e) => {
                warn!(error = %e, "Endpoint discovery failed");
                Vec::new()
            }
        };

        // 2. Without a gadget the conversation cannot continue
        let Some(first) = endpoints.into_iter().next() else {
            debug!("No connected gadget endpoints available");
            return Ok(ResponseBuilder::new()
                .speak(&self.no_gadgets_speech)
                .set_should_end_session(true)
                .build());
        };

        // 3. Remember the gadget for the rest of the conversation
        debug!(endpoint_id = %first.endpoint_id, "Storing endpoint id");
        state.bind_endpoint(first.endpoint_id);

        Ok(ResponseBuilder::new()
            .speak(&self.launch_speech)
            .set_should_end_session(false)
            .build())
    }
}
