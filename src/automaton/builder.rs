//! Fluent builder for automata.

use super::{Automaton, State, Symbol, Transition, ValidationError};

/// Builder for constructing automata with a fluent API.
///
/// `build` runs [`Automaton::validate`], so a builder cannot produce an
/// automaton that violates the model invariants.
///
/// # Example
///
/// ```rust
/// use dfastage::automaton::{AutomatonBuilder, State};
///
/// let automaton = AutomatonBuilder::new("Even length")
///     .description("Accepts strings with an even total length")
///     .state(State::new("q0", 100.0, 200.0).initial().accepting())
///     .state(State::new("q1", 280.0, 200.0))
///     .transition("q0", "q1", 'a')
///     .transition("q0", "q1", 'b')
///     .transition("q1", "q0", 'a')
///     .transition("q1", "q0", 'b')
///     .alphabet(['a', 'b'])
///     .build()
///     .unwrap();
///
/// assert_eq!(automaton.states.len(), 2);
/// ```
pub struct AutomatonBuilder {
    name: String,
    description: String,
    states: Vec<State>,
    transitions: Vec<Transition>,
    alphabet: Vec<Symbol>,
}

impl AutomatonBuilder {
    /// Create a new builder for an automaton with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            states: Vec::new(),
            transitions: Vec::new(),
            alphabet: Vec::new(),
        }
    }

    /// Set the human-readable description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a state.
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Add a transition by endpoint ids.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        symbol: Symbol,
    ) -> Self {
        self.transitions.push(Transition::new(from, to, symbol));
        self
    }

    /// Set the input alphabet.
    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        self.alphabet = symbols.into_iter().collect();
        self
    }

    /// Build and validate the automaton.
    pub fn build(self) -> Result<Automaton, ValidationError> {
        let automaton = Automaton {
            name: self.name,
            description: self.description,
            states: self.states,
            transitions: self.transitions,
            alphabet: self.alphabet,
        };
        automaton.validate()?;
        Ok(automaton)
    }
}
