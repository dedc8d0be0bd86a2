//! Property-based tests for dispatch
//!
//! These tests verify the routing and directive invariants across arbitrary
//! endpoint ids, command intents and event sequences.

use std::sync::Arc;

use futures::executor::block_on;
use proptest::prelude::*;

use super::router::EventRouter;
use super::skill::{skill_routes, SkillComponents, NO_INTENT};
use crate::adapters::discovery::InMemoryEndpointDirectory;
use crate::domain::foundation::{ConversationId, EndpointId};
use crate::domain::skill::{
    CommandCode, ConversationContext, DirectiveBuilder, EndpointDescriptor, SessionEndedReason,
    SessionKey, SessionState, SkillEvent, SkillRequest,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn router_for(endpoints: &[String]) -> EventRouter {
    let directory = endpoints.iter().fold(InMemoryEndpointDirectory::new(), |dir, id| {
        dir.with_endpoint(EndpointDescriptor::new(EndpointId::new(id.as_str()).unwrap()))
    });
    skill_routes(SkillComponents::new(Arc::new(directory)))
        .build()
        .unwrap()
}

fn request(event: SkillEvent) -> SkillRequest {
    let context = ConversationContext::new(ConversationId::new("session-prop").unwrap());
    SkillRequest::new("req-prop", context, event)
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_endpoint_id() -> impl Strategy<Value = String> {
    "amzn1\\.ask\\.endpoint\\.[A-Z0-9]{8,16}"
}

fn arb_command() -> impl Strategy<Value = CommandCode> {
    prop_oneof![
        Just(CommandCode::TvOff),
        Just(CommandCode::TvOn),
        Just(CommandCode::Source),
        Just(CommandCode::Reboot),
        Just(CommandCode::Upgrade),
    ]
}

fn arb_event() -> impl Strategy<Value = SkillEvent> {
    prop_oneof![
        Just(SkillEvent::Launch),
        arb_command().prop_map(|c| SkillEvent::IntentMatched { name: c.intent_name().to_string() }),
        Just(SkillEvent::IntentMatched { name: NO_INTENT.to_string() }),
        "[A-Za-z.]{3,20}Intent".prop_map(|name| SkillEvent::IntentMatched { name }),
        Just(SkillEvent::SessionEnded { reason: SessionEndedReason::UserInitiated }),
        "[A-Za-z.]{3,20}".prop_map(|request_type| SkillEvent::Unrecognized { request_type }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Same endpoint and command → identical envelope
    #[test]
    fn prop_directive_build_is_deterministic(id in arb_endpoint_id(), command in arb_command()) {
        let builder = DirectiveBuilder::default();
        let endpoint = EndpointId::new(id).unwrap();

        prop_assert_eq!(builder.build(&endpoint, command), builder.build(&endpoint, command));
    }

    /// A sent directive always targets the launch-bound endpoint with the intent's command
    #[test]
    fn prop_command_targets_first_endpoint(
        endpoints in proptest::collection::vec(arb_endpoint_id(), 1..4),
        command in arb_command(),
    ) {
        let router = router_for(&endpoints);
        let mut state = SessionState::new();

        block_on(router.dispatch(&request(SkillEvent::Launch), &mut state)).unwrap();
        let event = SkillEvent::IntentMatched { name: command.intent_name().to_string() };
        let response = block_on(router.dispatch(&request(event), &mut state)).unwrap();

        prop_assert_eq!(response.directives.len(), 1);
        prop_assert_eq!(response.directives[0].endpoint_id().as_str(), endpoints[0].as_str());
        prop_assert_eq!(response.directives[0].name(), command);
        prop_assert!(response.ends_session());
    }

    /// Every send replaces the correlation token
    #[test]
    fn prop_tokens_are_fresh(id in arb_endpoint_id(), commands in proptest::collection::vec(arb_command(), 2..6)) {
        let router = router_for(&[id]);
        let mut state = SessionState::new();
        block_on(router.dispatch(&request(SkillEvent::Launch), &mut state)).unwrap();

        let mut seen = std::collections::HashSet::new();
        for command in commands {
            let event = SkillEvent::IntentMatched { name: command.intent_name().to_string() };
            block_on(router.dispatch(&request(event), &mut state)).unwrap();
            prop_assert!(seen.insert(state.get(SessionKey::Token).unwrap()));
        }
    }

    /// Directives only ever appear once a gadget is bound, and never in a response that keeps the session open
    #[test]
    fn prop_directives_require_binding(
        endpoints in proptest::collection::vec(arb_endpoint_id(), 0..3),
        events in proptest::collection::vec(arb_event(), 1..8),
    ) {
        let router = router_for(&endpoints);
        let mut state = SessionState::new();

        for event in events {
            let bound_before = state.endpoint_id().is_ok();
            if let Some(response) = block_on(router.dispatch(&request(event), &mut state)) {
                if !response.directives.is_empty() {
                    prop_assert!(bound_before);
                    prop_assert!(response.ends_session());
                }
            }
        }
    }

    /// Same event against the same session state → same binding, same response, same binding state
    #[test]
    fn prop_dispatch_is_deterministic(
        endpoints in proptest::collection::vec(arb_endpoint_id(), 0..3),
        bound in any::<bool>(),
        event in arb_event(),
    ) {
        let router = router_for(&endpoints);
        let mut state = SessionState::new();
        if bound {
            block_on(router.dispatch(&request(SkillEvent::Launch), &mut state));
        }
        let mut first_state = state.clone();
        let mut second_state = state;

        let first_route = router.route(&event).map(str::to_string);
        let first = block_on(router.dispatch(&request(event.clone()), &mut first_state));
        let second_route = router.route(&event).map(str::to_string);
        let second = block_on(router.dispatch(&request(event), &mut second_state));

        prop_assert_eq!(first_route, second_route);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_state.endpoint_id().ok(), second_state.endpoint_id().ok());
    }
}
