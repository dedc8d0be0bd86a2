//! Skill request handlers.

mod decline;
mod fallback;
mod launch;
mod send_command;
mod session_ended;

pub use decline::DeclineHandler;
pub use fallback::ApologyErrorHandler;
pub use launch::LaunchHandler;
pub use send_command::SendCommandHandler;
pub use session_ended::{SessionEndedHandler, UnrecognizedRequestHandler};
