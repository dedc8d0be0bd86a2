//! HTTP adapter for the skill endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, HealthResponse, RequestEnvelope, ResponseEnvelope, RESPONSE_VERSION,
    SEND_DIRECTIVE_TYPE,
};
pub use handlers::SkillAppState;
pub use routes::skill_router;
