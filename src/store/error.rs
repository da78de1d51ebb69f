//! Persistence and export errors.

use crate::automaton::ValidationError;
use thiserror::Error;

/// Errors from the automaton store and the JSON import/export path.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no saved automaton named '{0}'")]
    NotFound(String),

    /// The backing blob or imported text is not valid JSON of the expected
    /// shape (including a missing `states` array).
    #[error("malformed automaton data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Structurally parseable but violating the model invariants.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
