//! Predicates used to bind handlers to events.

use crate::domain::skill::{RequestType, SkillEvent};

/// Matches every event of the given request type.
pub fn is_request_type(request_type: RequestType) -> impl Fn(&SkillEvent) -> bool + Send + Sync + 'static {
    move |event| event.request_type() == request_type
}

/// Matches intent events with exactly this intent name.
pub fn is_intent_name(name: impl Into<String>) -> impl Fn(&SkillEvent) -> bool + Send + Sync + 'static {
    let name = name.into();
    move |event| event.intent_name() == Some(name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skill::SessionEndedReason;

    #[test]
    fn request_type_predicate_matches_variant() {
        let launch = is_request_type(RequestType::Launch);
        assert!(launch(&SkillEvent::Launch));
        assert!(!launch(&SkillEvent::SessionEnded {
            reason: SessionEndedReason::UserInitiated
        }));
    }

    #[test]
    fn intent_predicate_is_exact_and_case_sensitive() {
        let tv_off = is_intent_name("TVOffIntent");
        assert!(tv_off(&SkillEvent::IntentMatched { name: "TVOffIntent".into() }));
        assert!(!tv_off(&SkillEvent::IntentMatched { name: "tvoffintent".into() }));
        assert!(!tv_off(&SkillEvent::IntentMatched { name: "TVOnIntent".into() }));
        assert!(!tv_off(&SkillEvent::Launch));
    }
}
