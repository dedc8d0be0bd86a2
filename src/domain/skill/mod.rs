//! Skill Domain Module
//!
//! Vocabulary of the gadget skill: inbound events, per-conversation session
//! state, gadget command codes, the directives sent to a bound gadget, and the
//! responses returned to the platform.
//!
//! # Conversation lifecycle
//!
//! ```text
//! Uninitialized --launch finds gadget--> Bound --terminal response--> Ended
//!       \----------------terminal response-------------------------/
//! ```
//!
//! Only a `Bound` conversation can send gadget commands.

pub mod command;
pub mod directive;
pub mod endpoint;
pub mod event;
pub mod phase;
pub mod response;
pub mod session;
pub mod speech;

pub use command::CommandCode;
pub use directive::{
    CommandEnvelope, DirectiveBuilder, DirectiveEndpoint, DirectiveHeader, DEFAULT_GADGET_NAMESPACE,
};
pub use endpoint::EndpointDescriptor;
pub use event::{
    ConversationContext, RequestType, SessionEndedReason, SkillEvent, SkillRequest, SystemContext,
};
pub use phase::ConversationPhase;
pub use response::{ResponseBuilder, SkillResponse};
pub use session::{SessionKey, SessionState, SessionStateError};
pub use speech::SpeechCatalog;
