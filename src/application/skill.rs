//! Skill assembly - Wire every handler into an event router
//!
//! Registration order matters: the first matching binding wins.
//!
//! | Binding               | Predicate                                  |
//! |-----------------------|--------------------------------------------|
//! | `LaunchRequest`       | request type is launch                     |
//! | `<Command>Intent`     | intent name, one per gadget command        |
//! | `AMAZON.NoIntent`     | intent name                                |
//! | `SessionEndedRequest` | request type is session ended              |
//! | `Unrecognized`        | request type is unrecognized               |

use std::sync::Arc;

use crate::domain::skill::{CommandCode, DirectiveBuilder, RequestType, SpeechCatalog};
use crate::ports::EndpointDirectory;

use super::handlers::{
    ApologyErrorHandler, DeclineHandler, LaunchHandler, SendCommandHandler, SessionEndedHandler,
    UnrecognizedRequestHandler,
};
use super::predicates::{is_intent_name, is_request_type};
use super::router::RouterBuilder;

/// Built-in intent for a negative answer.
pub const NO_INTENT: &str = "AMAZON.NoIntent";

/// Collaborators the skill's handlers depend on.
pub struct SkillComponents {
    pub directory: Arc<dyn EndpointDirectory>,
    pub directives: DirectiveBuilder,
    pub speech: SpeechCatalog,
}

impl SkillComponents {
    pub fn new(directory: Arc<dyn EndpointDirectory>) -> Self {
        Self {
            directory,
            directives: DirectiveBuilder::default(),
            speech: SpeechCatalog::default(),
        }
    }

    pub fn with_directives(mut self, directives: DirectiveBuilder) -> Self {
        self.directives = directives;
        self
    }

    pub fn with_speech(mut self, speech: SpeechCatalog) -> Self {
        self.speech = speech;
        self
    }
}

/// Registers the skill's bindings and fallback.
///
/// Interceptors can still be added to the returned builder before `build`.
pub fn skill_routes(components: SkillComponents) -> RouterBuilder {
    let SkillComponents {
        directory,
        directives,
        speech,
    } = components;
    let directives = Arc::new(directives);

    let mut builder = RouterBuilder::new().add_request_handler(
        "LaunchRequest",
        is_request_type(RequestType::Launch),
        Arc::new(LaunchHandler::new(directory, speech.launch, speech.no_gadgets)),
    );

    for (intent, command) in CommandCode::catalogue() {
        let handler = SendCommandHandler::new(command, Arc::clone(&directives))
            .with_acknowledgement(speech.command_ack.clone());
        builder = builder.add_request_handler(intent, is_intent_name(intent), Arc::new(handler));
    }

    builder
        .add_request_handler(
            NO_INTENT,
            is_intent_name(NO_INTENT),
            Arc::new(DeclineHandler::new(speech.farewell)),
        )
        .add_request_handler(
            "SessionEndedRequest",
            is_request_type(RequestType::SessionEnded),
            Arc::new(SessionEndedHandler::new()),
        )
        .add_request_handler(
            "Unrecognized",
            is_request_type(RequestType::Unrecognized),
            Arc::new(UnrecognizedRequestHandler::new()),
        )
        .exception_handler(Arc::new(ApologyErrorHandler::new(speech.apology)))
}
