//! DFA data model and validation.
//!
//! This module contains the pure value types describing a deterministic
//! finite automaton:
//! - `State`, `Transition` and `Automaton` definitions
//! - Structural validation via [`Automaton::validate`]
//! - Transition grouping for shared-edge rendering
//!
//! An `Automaton` is plain data. It is cloned (deep copy) whenever it is
//! handed to the sequencer, the engine or the store, so no component can
//! observe another's in-flight mutation.

mod builder;
mod error;
mod grouping;

pub use builder::AutomatonBuilder;
pub use error::ValidationError;
pub use grouping::{group_transitions, TransitionGroup, TransitionGroups, BIDIRECTIONAL_CURVE};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier of a state, unique within one automaton.
pub type StateId = String;

/// A single input symbol.
pub type Symbol = char;

/// One state of an automaton.
///
/// The `x`/`y` coordinates are opaque metadata for the renderer; the core
/// never interprets them. All fields except `id` default when deserializing,
/// so hand-written JSON may list only `{"id": "q0"}`.
///
/// # Example
///
/// ```rust
/// use dfastage::automaton::State;
///
/// let q0 = State::new("q0", 100.0, 200.0).initial();
/// let q1 = State::new("q1", 280.0, 200.0).accepting();
///
/// assert!(q0.initial && !q0.accepting);
/// assert!(q1.accepting && !q1.initial);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Unique identifier, shown as the node label
    pub id: StateId,
    /// Horizontal canvas position (renderer metadata)
    #[serde(default)]
    pub x: f64,
    /// Vertical canvas position (renderer metadata)
    #[serde(default)]
    pub y: f64,
    /// Whether this is the start state
    #[serde(default)]
    pub initial: bool,
    /// Whether ending here accepts the input
    #[serde(default)]
    pub accepting: bool,
}

impl State {
    /// Create a non-initial, non-accepting state at the given position.
    pub fn new(id: impl Into<StateId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            initial: false,
            accepting: false,
        }
    }

    /// Mark this state as the start state.
    pub fn initial(mut self) -> Self {
        self.initial = true;
        self
    }

    /// Mark this state as accepting.
    pub fn accepting(mut self) -> Self {
        self.accepting = true;
        self
    }
}

/// A deterministic transition: from `from`, reading `symbol`, go to `to`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub symbol: Symbol,
}

impl Transition {
    pub fn new(from: impl Into<StateId>, to: impl Into<StateId>, symbol: Symbol) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            symbol,
        }
    }
}

/// A complete hand-authored DFA.
///
/// `states` is mandatory when deserializing; a JSON object without it is
/// rejected as structurally malformed. Everything else defaults, which keeps
/// saved and exported automata forward-compatible with sparse input.
///
/// # Example
///
/// ```rust
/// use dfastage::automaton::{Automaton, State, Transition};
///
/// let automaton = Automaton {
///     name: "Ends with a".into(),
///     description: "Accepts strings ending in 'a'".into(),
///     states: vec![
///         State::new("q0", 100.0, 200.0).initial(),
///         State::new("q1", 280.0, 200.0).accepting(),
///     ],
///     transitions: vec![
///         Transition::new("q0", "q1", 'a'),
///         Transition::new("q0", "q0", 'b'),
///         Transition::new("q1", "q1", 'a'),
///         Transition::new("q1", "q0", 'b'),
///     ],
///     alphabet: vec!['a', 'b'],
/// };
///
/// assert!(automaton.validate().is_ok());
/// assert_eq!(automaton.initial_state().unwrap().id, "q0");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Automaton {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub states: Vec<State>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default)]
    pub alphabet: Vec<Symbol>,
}

impl Automaton {
    /// Check the model invariants: unique state ids and exactly one
    /// initial state.
    ///
    /// Completeness and determinism are deliberately not checked here; a
    /// missing transition surfaces during simulation as a terminal
    /// [`SimulationEvent::Stuck`](crate::engine::SimulationEvent::Stuck) event.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let initial = self.states.iter().filter(|s| s.initial).count();
        if initial != 1 {
            return Err(ValidationError::NoInitialState { found: initial });
        }

        let mut seen = HashSet::new();
        for state in &self.states {
            if !seen.insert(state.id.as_str()) {
                return Err(ValidationError::DuplicateStateId(state.id.clone()));
            }
        }

        Ok(())
    }

    /// The designated start state, if any.
    pub fn initial_state(&self) -> Option<&State> {
        self.states.iter().find(|s| s.initial)
    }

    /// Look up a state by id.
    pub fn state(&self, id: &str) -> Option<&State> {
        self.states.iter().find(|s| s.id == id)
    }

    /// The unique transition leaving `from` on `symbol`, if present.
    pub fn transition_from(&self, from: &str, symbol: Symbol) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from == from && t.symbol == symbol)
    }

    /// Whether `symbol` belongs to this automaton's alphabet.
    pub fn in_alphabet(&self, symbol: Symbol) -> bool {
        self.alphabet.contains(&symbol)
    }
}
