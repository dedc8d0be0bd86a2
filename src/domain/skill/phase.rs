//! Conversation phase: `Uninitialized → Bound → Ended`.

use crate::domain::foundation::{StateMachine, ValidationError};

use super::response::SkillResponse;
use super::session::SessionState;

/// Where a conversation stands with respect to its gadget binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversationPhase {
    /// No gadget endpoint has been bound yet.
    Uninitialized,
    /// A launch bound the conversation to a gadget endpoint.
    Bound,
    /// A response asked the platform to close the conversation.
    Ended,
}

impl ConversationPhase {
    /// Computes the phase reached after a dispatch produced `response`
    /// and left the session in `state`.
    pub fn after_dispatch(
        &self,
        state: &SessionState,
        response: &SkillResponse,
    ) -> Result<Self, ValidationError> {
        let target = if response.ends_session() {
            ConversationPhase::Ended
        } else {
            state.phase()
        };
        self.transition_to(target)
    }
}

impl StateMachine for ConversationPhase {
    const FIELD: &'static str = "conversation_phase";

    fn valid_transitions(&self) -> &'static [Self] {
        use ConversationPhase::*;
        match self {
            Uninitialized => &[Uninitialized, Bound, Ended],
            Bound => &[Bound, Ended],
            Ended => &[],
        }
    }
}
