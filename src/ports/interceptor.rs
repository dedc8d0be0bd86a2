//! Dispatch interceptor ports.
//!
//! Observers the router calls around every dispatch. They only ever see
//! shared references, so they cannot alter the request, the response or the
//! session state.

use crate::domain::skill::{SessionState, SkillRequest, SkillResponse};

/// Called before predicate evaluation with the raw inbound request.
pub trait RequestInterceptor: Send + Sync {
    fn before_dispatch(&self, request: &SkillRequest, state: &SessionState);
}

/// Called after the handler (or fallback) produced the final response.
pub trait ResponseInterceptor: Send + Sync {
    fn after_dispatch(&self, request: &SkillRequest, response: &SkillResponse, state: &SessionState);
}
