//! Validation errors for the automaton model.

use thiserror::Error;

/// Errors detected by [`Automaton::validate`](super::Automaton::validate).
///
/// A failed validation rejects the automaton before it reaches any other
/// component; the previously loaded session, if any, stays active.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("expected exactly one initial state, found {found}")]
    NoInitialState { found: usize },

    #[error("duplicate state id '{0}'")]
    DuplicateStateId(String),
}
