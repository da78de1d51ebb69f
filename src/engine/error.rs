//! Input pre-check errors.

use crate::automaton::Symbol;
use thiserror::Error;

/// Errors raised before a simulation sequence is created.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The input string contains a character outside the automaton's
    /// alphabet. Raised by [`check_input`](super::check_input); no engine
    /// sequence exists when this is returned.
    #[error("input symbol '{symbol}' is not in the alphabet")]
    InvalidSymbol { symbol: Symbol },
}
