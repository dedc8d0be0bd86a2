//! HTTP handlers for the skill endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use crate::application::EventRouter;
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ErrorResponse, HealthResponse, RequestEnvelope, ResponseEnvelope};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SkillAppState {
    router: Arc<EventRouter>,
    application_id: Option<String>,
}

impl SkillAppState {
    pub fn new(router: Arc<EventRouter>) -> Self {
        Self {
            router,
            application_id: None,
        }
    }

    /// Reject envelopes addressed to any other skill.
    pub fn with_application_id(mut self, application_id: Option<String>) -> Self {
        self.application_id = application_id;
        self
    }

    fn verify_application(&self, envelope: &RequestEnvelope) -> Result<(), DomainError> {
        let Some(expected) = self.application_id.as_deref() else {
            return Ok(());
        };
        match envelope.application_id() {
            Some(actual) if actual == expected => Ok(()),
            actual => Err(DomainError::new(
                ErrorCode::ApplicationMismatch,
                "Request is addressed to a different skill",
            )
            .with_detail("application_id", actual.unwrap_or("<missing>"))),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST {skill_path} - Dispatch one skill request envelope
pub async fn handle_skill_request(
    State(state): State<SkillAppState>,
    payload: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Response {
    let Json(envelope) = match payload {
        Ok(envelope) => envelope,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected malformed skill envelope");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    if let Err(e) = state.verify_application(&envelope) {
        warn!(error = %e, "Rejected skill envelope");
        return handle_domain_error(e);
    }

    let (request, mut session) = match envelope.into_domain() {
        Ok(converted) => converted,
        Err(e) => {
            warn!(error = %e, "Rejected skill envelope");
            return handle_domain_error(e);
        }
    };

    let response = state.router.dispatch(&request, &mut session).await;
    if response.is_none() {
        debug!(request_id = %request.request_id, "Unmatched request answered with empty response");
    }

    (StatusCode::OK, Json(ResponseEnvelope::new(response, session))).into_response()
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_domain_error(error: DomainError) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(error))).into_response()
}
