//! Dfastage: a step-by-step DFA construction and simulation engine
//!
//! Dfastage models a deterministic finite automaton as plain data, replays
//! its construction as a discrete event sequence, steps it over an input
//! string to an accept/reject verdict, and drives both sequences through a
//! pausable, speed-configurable playback controller. Rendering is left to a
//! collaborator behind the [`playback::RenderSink`] trait.
//!
//! The crate keeps a "pure core, imperative shell" split: everything in
//! [`automaton`], [`sequence`] and [`engine`] is pure values and pure
//! functions; [`playback`] and [`store`] are the shell that owns mutable
//! session state and talks to the outside world.
//!
//! # Example
//!
//! ```rust
//! use dfastage::automaton::{AutomatonBuilder, State};
//! use dfastage::engine::{Simulation, SimulationEvent};
//! use dfastage::sequence::build_sequence;
//!
//! let automaton = AutomatonBuilder::new("Ends with a")
//!     .state(State::new("q0", 100.0, 200.0).initial())
//!     .state(State::new("q1", 280.0, 200.0).accepting())
//!     .transition("q0", "q1", 'a')
//!     .transition("q0", "q0", 'b')
//!     .transition("q1", "q1", 'a')
//!     .transition("q1", "q0", 'b')
//!     .alphabet(['a', 'b'])
//!     .build()
//!     .unwrap();
//!
//! // Two state-creation events, then four grouped edges.
//! let sequence = build_sequence(&automaton);
//! assert_eq!(sequence.len(), 6);
//!
//! // Walk the automaton over an input string, one event at a time.
//! let verdict = Simulation::new(automaton, "ba").last().unwrap();
//! assert!(matches!(verdict, SimulationEvent::Accepted { .. }));
//! ```

pub mod automaton;
pub mod engine;
pub mod library;
pub mod playback;
pub mod sequence;
pub mod store;

// Re-export commonly used types
pub use automaton::{Automaton, AutomatonBuilder, State, Transition, ValidationError};
pub use engine::{Simulation, SimulationEvent};
pub use playback::{PlaybackController, PlaybackPhase, RenderSink};
pub use sequence::{build_sequence, ConstructionEvent};
