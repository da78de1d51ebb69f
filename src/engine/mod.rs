//! Execution engine: stepping a DFA over an input string.
//!
//! [`Simulation`] is a lazy, single-consumer event sequence — the Rust
//! rendition of the suspended generator the playback layer pulls from. Each
//! call to `next` advances an explicit cursor state machine by one step and
//! yields at most one [`SimulationEvent`]. A simulation is not restartable:
//! to run the same input again, build a fresh one.

mod error;

pub use error::InputError;

use crate::automaton::{Automaton, StateId, Symbol, Transition};
use serde::{Deserialize, Serialize};

/// One step of a simulation run.
///
/// `Stuck`, `Accepted` and `Rejected` are terminal: the sequence ends after
/// yielding one of them. Consumers match exhaustively; there is no
/// field-presence sniffing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// The walk begins at the initial state.
    Started { state: StateId },
    /// A symbol was read and a transition taken.
    Consumed {
        transition: Transition,
        message: String,
    },
    /// The walk arrived in a state after consuming a symbol.
    Entered { state: StateId, message: String },
    /// No transition exists for the current state and symbol. Terminal;
    /// remaining input is not consumed.
    Stuck {
        state: StateId,
        symbol: Symbol,
        message: String,
    },
    /// All input consumed, final state accepting. Terminal.
    Accepted { state: StateId, message: String },
    /// All input consumed, final state not accepting. Terminal.
    Rejected { state: StateId, message: String },
}

impl SimulationEvent {
    /// Whether this event ends the sequence.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Stuck { .. } | Self::Accepted { .. } | Self::Rejected { .. }
        )
    }

    /// The narrative text for this step, if it carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Started { .. } => None,
            Self::Consumed { message, .. }
            | Self::Entered { message, .. }
            | Self::Stuck { message, .. }
            | Self::Accepted { message, .. }
            | Self::Rejected { message, .. } => Some(message),
        }
    }
}

/// Cursor position within a simulation run.
#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Start,
    /// About to look up the transition for `input[pos]`
    Consume(usize),
    /// Just moved on `input[pos]`, about to report the new state
    Enter(usize),
    Verdict,
    Done,
}

/// Lazy event sequence for one DFA walk over one input string.
///
/// Owns a deep copy of the automaton, so later edits to the caller's value
/// cannot affect a run in flight. Requires an automaton satisfying
/// [`Automaton::validate`]; the caller must also run [`check_input`] first —
/// the engine only detects the narrower missing-transition condition, which
/// can occur even for in-alphabet symbols on incomplete automata.
///
/// # Example
///
/// ```rust
/// use dfastage::automaton::{AutomatonBuilder, State};
/// use dfastage::engine::{Simulation, SimulationEvent};
///
/// let automaton = AutomatonBuilder::new("Ends with a")
///     .state(State::new("q0", 100.0, 200.0).initial())
///     .state(State::new("q1", 280.0, 200.0).accepting())
///     .transition("q0", "q1", 'a')
///     .transition("q0", "q0", 'b')
///     .transition("q1", "q1", 'a')
///     .transition("q1", "q0", 'b')
///     .alphabet(['a', 'b'])
///     .build()
///     .unwrap();
///
/// let verdict = Simulation::new(automaton, "ba").last().unwrap();
/// assert!(matches!(verdict, SimulationEvent::Accepted { state, .. } if state == "q1"));
/// ```
pub struct Simulation {
    automaton: Automaton,
    input: Vec<Symbol>,
    current: StateId,
    phase: Phase,
}

impl Simulation {
    /// Begin a fresh walk of `automaton` over `input`.
    pub fn new(automaton: Automaton, input: &str) -> Self {
        let (current, phase) = match automaton.initial_state() {
            Some(state) => (state.id.clone(), Phase::Start),
            // Precondition violated; stay total and yield nothing.
            None => (StateId::new(), Phase::Done),
        };

        Self {
            automaton,
            input: input.chars().collect(),
            current,
            phase,
        }
    }
}

impl Iterator for Simulation {
    type Item = SimulationEvent;

    fn next(&mut self) -> Option<SimulationEvent> {
        match self.phase.clone() {
            Phase::Start => {
                self.phase = if self.input.is_empty() {
                    Phase::Verdict
                } else {
                    Phase::Consume(0)
                };
                Some(SimulationEvent::Started {
                    state: self.current.clone(),
                })
            }
            Phase::Consume(pos) => {
                let symbol = self.input[pos];
                match self.automaton.transition_from(&self.current, symbol) {
                    Some(transition) => {
                        let transition = transition.clone();
                        let message = format!(
                            "Reading '{}': {} → {}",
                            symbol, transition.from, transition.to
                        );
                        self.current = transition.to.clone();
                        self.phase = Phase::Enter(pos);
                        Some(SimulationEvent::Consumed {
                            transition,
                            message,
                        })
                    }
                    None => {
                        // Fail fast: the rest of the input is not consumed.
                        self.phase = Phase::Done;
                        Some(SimulationEvent::Stuck {
                            state: self.current.clone(),
                            symbol,
                            message: format!(
                                "No transition from {} on '{}'",
                                self.current, symbol
                            ),
                        })
                    }
                }
            }
            Phase::Enter(pos) => {
                self.phase = if pos + 1 == self.input.len() {
                    Phase::Verdict
                } else {
                    Phase::Consume(pos + 1)
                };
                Some(SimulationEvent::Entered {
                    state: self.current.clone(),
                    message: format!("Now in state {}", self.current),
                })
            }
            Phase::Verdict => {
                self.phase = Phase::Done;
                let accepting = self
                    .automaton
                    .state(&self.current)
                    .is_some_and(|s| s.accepting);
                let state = self.current.clone();
                Some(if accepting {
                    SimulationEvent::Accepted {
                        state,
                        message: "String accepted!".into(),
                    }
                } else {
                    SimulationEvent::Rejected {
                        state,
                        message: "String rejected!".into(),
                    }
                })
            }
            Phase::Done => None,
        }
    }
}

/// Reject input containing characters outside the automaton's alphabet.
///
/// Callers run this before constructing a [`Simulation`]; the engine itself
/// assumes a pre-validated alphabet.
pub fn check_input(automaton: &Automaton, input: &str) -> Result<(), InputError> {
    for symbol in input.chars() {
        if !automaton.in_alphabet(symbol) {
            return Err(InputError::InvalidSymbol { symbol });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{AutomatonBuilder, State};

    fn ends_with_a() -> Automaton {
        AutomatonBuilder::new("Ends with a")
            .state(State::new("q0", 100.0, 200.0).initial())
            .state(State::new("q1", 280.0, 200.0).accepting())
            .transition("q0", "q1", 'a')
            .transition("q0", "q0", 'b')
            .transition("q1", "q1", 'a')
            .transition("q1", "q0", 'b')
            .alphabet(['a', 'b'])
            .build()
            .unwrap()
    }

    fn even_number_of_a() -> Automaton {
        AutomatonBuilder::new("Even number of a's")
            .state(State::new("q0", 100.0, 200.0).initial().accepting())
            .state(State::new("q1", 280.0, 200.0))
            .transition("q0", "q1", 'a')
            .transition("q0", "q0", 'b')
            .transition("q1", "q0", 'a')
            .transition("q1", "q1", 'b')
            .alphabet(['a', 'b'])
            .build()
            .unwrap()
    }

    fn verdict(automaton: Automaton, input: &str) -> SimulationEvent {
        Simulation::new(automaton, input).last().unwrap()
    }

    #[test]
    fn ends_with_a_accepts_ba() {
        assert_eq!(
            verdict(ends_with_a(), "ba"),
            SimulationEvent::Accepted {
                state: "q1".into(),
                message: "String accepted!".into(),
            }
        );
    }

    #[test]
    fn ends_with_a_rejects_ab() {
        assert!(matches!(
            verdict(ends_with_a(), "ab"),
            SimulationEvent::Rejected { state, .. } if state == "q0"
        ));
    }

    #[test]
    fn ends_with_a_rejects_empty_input() {
        assert!(matches!(
            verdict(ends_with_a(), ""),
            SimulationEvent::Rejected { state, .. } if state == "q0"
        ));
    }

    #[test]
    fn even_a_accepts_aa_and_aab() {
        assert!(matches!(
            verdict(even_number_of_a(), "aa"),
            SimulationEvent::Accepted { .. }
        ));
        assert!(matches!(
            verdict(even_number_of_a(), "aab"),
            SimulationEvent::Accepted { .. }
        ));
    }

    #[test]
    fn even_a_rejects_single_a() {
        assert!(matches!(
            verdict(even_number_of_a(), "a"),
            SimulationEvent::Rejected { .. }
        ));
    }

    #[test]
    fn full_event_trace_for_short_input() {
        let automaton = ends_with_a();
        let events: Vec<SimulationEvent> = Simulation::new(automaton.clone(), "a").collect();

        assert_eq!(
            events,
            vec![
                SimulationEvent::Started { state: "q0".into() },
                SimulationEvent::Consumed {
                    transition: automaton.transitions[0].clone(),
                    message: "Reading 'a': q0 → q1".into(),
                },
                SimulationEvent::Entered {
                    state: "q1".into(),
                    message: "Now in state q1".into(),
                },
                SimulationEvent::Accepted {
                    state: "q1".into(),
                    message: "String accepted!".into(),
                },
            ]
        );
    }

    #[test]
    fn missing_transition_yields_terminal_stuck_event() {
        // 'c' is in the alphabet but q0 has no transition for it.
        let automaton = AutomatonBuilder::new("Incomplete")
            .state(State::new("q0", 0.0, 0.0).initial())
            .transition("q0", "q0", 'a')
            .transition("q0", "q0", 'b')
            .alphabet(['a', 'b', 'c'])
            .build()
            .unwrap();

        assert!(check_input(&automaton, "c").is_ok());

        let events: Vec<SimulationEvent> = Simulation::new(automaton, "c").collect();
        assert_eq!(
            events,
            vec![
                SimulationEvent::Started { state: "q0".into() },
                SimulationEvent::Stuck {
                    state: "q0".into(),
                    symbol: 'c',
                    message: "No transition from q0 on 'c'".into(),
                },
            ]
        );
    }

    #[test]
    fn stuck_consumes_no_further_symbols() {
        let automaton = AutomatonBuilder::new("Incomplete")
            .state(State::new("q0", 0.0, 0.0).initial())
            .transition("q0", "q0", 'a')
            .alphabet(['a', 'b'])
            .build()
            .unwrap();

        // "ba" stops at 'b'; the trailing 'a' is never read.
        let events: Vec<SimulationEvent> = Simulation::new(automaton, "ba").collect();
        assert_eq!(events.len(), 2);
        assert!(events[1].is_terminal());
    }

    #[test]
    fn exhausted_simulation_stays_exhausted() {
        let mut simulation = Simulation::new(ends_with_a(), "a");
        while simulation.next().is_some() {}
        assert!(simulation.next().is_none());
    }

    #[test]
    fn check_input_rejects_foreign_symbol() {
        assert_eq!(
            check_input(&ends_with_a(), "abz"),
            Err(InputError::InvalidSymbol { symbol: 'z' })
        );
        assert!(check_input(&ends_with_a(), "abba").is_ok());
        assert!(check_input(&ends_with_a(), "").is_ok());
    }

    #[test]
    fn terminal_events_are_terminal() {
        assert!(SimulationEvent::Accepted {
            state: "q0".into(),
            message: String::new()
        }
        .is_terminal());
        assert!(!SimulationEvent::Started { state: "q0".into() }.is_terminal());
    }
}
