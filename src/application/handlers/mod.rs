//! Application handlers.
//!
//! One handler per kind of skill event, plus the fallback that answers
//! whenever a handler fails.

pub mod skill;

pub use skill::{
    ApologyErrorHandler, DeclineHandler, LaunchHandler, SendCommandHandler, SessionEndedHandler,
    UnrecognizedRequestHandler,
};
