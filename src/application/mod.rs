//! Application layer - Routing and handlers.
//!
//! This layer turns classified skill events into responses. The router picks
//! exactly one handler per request; handlers coordinate the domain types and
//! the endpoint directory port.

pub mod errors;
pub mod handlers;
pub mod predicates;
pub mod router;
pub mod skill;

#[cfg(test)]
mod proptests;

pub use errors::HandlerError;
pub use handlers::{
    ApologyErrorHandler, DeclineHandler, LaunchHandler, SendCommandHandler, SessionEndedHandler,
    UnrecognizedRequestHandler,
};
pub use predicates::{is_intent_name, is_request_type};
pub use router::{ErrorHandler, EventRouter, Predicate, RequestHandler, RouterBuildError, RouterBuilder};
pub use skill::{skill_routes, SkillComponents, NO_INTENT};
