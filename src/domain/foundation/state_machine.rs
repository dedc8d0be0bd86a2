//! Transition-table state machines.

use super::ValidationError;

/// Lifecycle enum whose legal moves are a static table.
///
/// ```ignore
/// let next = ConversationPhase::Uninitialized.transition_to(ConversationPhase::Bound)?;
/// assert!(!next.is_terminal());
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// Field name reported when a transition is rejected.
    const FIELD: &'static str;

    /// States reachable from `self`, including `self` when staying is legal.
    fn valid_transitions(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Moves to `target` if the table allows it.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                Self::FIELD,
                format!("{:?} cannot move to {:?}", self, target),
            ))
        }
    }

    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
