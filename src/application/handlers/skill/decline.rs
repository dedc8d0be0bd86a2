//! DeclineHandler - The user said no; say goodbye

use async_trait::async_trait;
use tracing::info;

use crate::application::errors::HandlerError;
use crate::application::router::RequestHandler;
use crate::domain::skill::{ResponseBuilder, SessionState, SkillRequest, SkillResponse};

/// Handler for the built-in "no" intent
pub struct DeclineHandler {
    farewell: String,
}

impl DeclineHandler {
    pub fn new(farewell: impl Into<String>) -> Self {
        Self {
            farewell: farewell.into(),
        }
    }
}

#[async_trait]
impl RequestHandler for DeclineHandler {
    async fn handle(
        &self,
        _request: &SkillRequest,
        state: &mut SessionState,
    ) -> Result<SkillResponse, HandlerError> {
        // Only a bound conversation has something to decline
        let endpoint_id = state.endpoint_id()?;
        info!(endpoint_id = %endpoint_id, "Received NO intent");

        Ok(ResponseBuilder::new()
            .speak(&self.farewell)
            .set_should_end_session(true)
            .build())
    }
}
