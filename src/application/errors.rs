//! Errors raised by request handlers.

use crate::domain::skill::SessionStateError;

/// Why a handler could not produce a response.
///
/// Every variant is absorbed by the router's exception handler; none of
/// them reaches the transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    SessionState(#[from] SessionStateError),

    #[error("No handler understands request type '{0}'")]
    Unrecognized(String),

    #[error("Handler panicked: {0}")]
    Panicked(String),
}
