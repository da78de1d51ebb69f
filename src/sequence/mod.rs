//! Construction sequencer.
//!
//! Replays an automaton's construction as a discrete, replayable event
//! sequence: one event per state, then one per grouped edge. The exact order
//! is a public contract — it drives the step-by-step narrative shown while an
//! automaton is built up on screen.

use crate::automaton::{group_transitions, Automaton, State, TransitionGroup};
use serde::{Deserialize, Serialize};

/// One step of the construction narrative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConstructionEvent {
    StateCreated(State),
    TransitionGroupCreated(TransitionGroup),
}

impl ConstructionEvent {
    /// Human-readable description of the step, e.g.
    /// `Creating state q0 (Initial)` or
    /// `Adding transition from q0 to q1 on 'a,b'`.
    pub fn description(&self) -> String {
        match self {
            Self::StateCreated(state) => {
                let mut text = format!("Creating state {}", state.id);
                if state.initial {
                    text.push_str(" (Initial)");
                }
                if state.accepting {
                    text.push_str(" (Accepting)");
                }
                text
            }
            Self::TransitionGroupCreated(group) => format!(
                "Adding transition from {} to {} on '{}'",
                group.from,
                group.to,
                group.label()
            ),
        }
    }
}

/// Turn an automaton into its ordered construction sequence.
///
/// Total and pure: every automaton satisfying the model invariants has a
/// sequence, and an automaton with no states yields an empty one. All
/// `StateCreated` events come first, in `states` order, followed by all
/// `TransitionGroupCreated` events in first-seen `(from, to)` order.
///
/// # Example
///
/// ```rust
/// use dfastage::automaton::{AutomatonBuilder, State};
/// use dfastage::sequence::{build_sequence, ConstructionEvent};
///
/// let automaton = AutomatonBuilder::new("Loop")
///     .state(State::new("q0", 0.0, 0.0).initial().accepting())
///     .transition("q0", "q0", 'a')
///     .transition("q0", "q0", 'b')
///     .alphabet(['a', 'b'])
///     .build()
///     .unwrap();
///
/// let sequence = build_sequence(&automaton);
/// assert_eq!(sequence.len(), 2); // one state, one grouped self-loop
/// assert_eq!(sequence[0].description(), "Creating state q0 (Initial) (Accepting)");
/// assert_eq!(sequence[1].description(), "Adding transition from q0 to q0 on 'a,b'");
/// ```
pub fn build_sequence(automaton: &Automaton) -> Vec<ConstructionEvent> {
    let mut sequence = Vec::new();

    for state in &automaton.states {
        sequence.push(ConstructionEvent::StateCreated(state.clone()));
    }

    for group in group_transitions(&automaton.transitions) {
        sequence.push(ConstructionEvent::TransitionGroupCreated(group));
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{State, Transition};

    fn ends_with_a() -> Automaton {
        Automaton {
            name: "Ends with a".into(),
            description: String::new(),
            states: vec![
                State::new("q0", 100.0, 200.0).initial(),
                State::new("q1", 280.0, 200.0).accepting(),
            ],
            transitions: vec![
                Transition::new("q0", "q1", 'a'),
                Transition::new("q0", "q0", 'b'),
                Transition::new("q1", "q1", 'a'),
                Transition::new("q1", "q0", 'b'),
            ],
            alphabet: vec!['a', 'b'],
        }
    }

    #[test]
    fn sequence_has_exact_order_and_payloads() {
        let automaton = ends_with_a();
        let sequence = build_sequence(&automaton);

        assert_eq!(
            sequence,
            vec![
                ConstructionEvent::StateCreated(automaton.states[0].clone()),
                ConstructionEvent::StateCreated(automaton.states[1].clone()),
                ConstructionEvent::TransitionGroupCreated(TransitionGroup {
                    from: "q0".into(),
                    to: "q1".into(),
                    symbols: vec!['a'],
                }),
                ConstructionEvent::TransitionGroupCreated(TransitionGroup {
                    from: "q0".into(),
                    to: "q0".into(),
                    symbols: vec!['b'],
                }),
                ConstructionEvent::TransitionGroupCreated(TransitionGroup {
                    from: "q1".into(),
                    to: "q1".into(),
                    symbols: vec!['a'],
                }),
                ConstructionEvent::TransitionGroupCreated(TransitionGroup {
                    from: "q1".into(),
                    to: "q0".into(),
                    symbols: vec!['b'],
                }),
            ]
        );
    }

    #[test]
    fn states_precede_all_transition_groups() {
        let sequence = build_sequence(&ends_with_a());

        let first_group = sequence
            .iter()
            .position(|e| matches!(e, ConstructionEvent::TransitionGroupCreated(_)))
            .unwrap();

        assert!(sequence[..first_group]
            .iter()
            .all(|e| matches!(e, ConstructionEvent::StateCreated(_))));
        assert!(sequence[first_group..]
            .iter()
            .all(|e| matches!(e, ConstructionEvent::TransitionGroupCreated(_))));
    }

    #[test]
    fn empty_automaton_yields_empty_sequence() {
        let automaton = Automaton {
            name: "Empty".into(),
            description: String::new(),
            states: vec![],
            transitions: vec![],
            alphabet: vec![],
        };

        assert!(build_sequence(&automaton).is_empty());
    }

    #[test]
    fn descriptions_flag_initial_and_accepting() {
        let sequence = build_sequence(&ends_with_a());

        assert_eq!(sequence[0].description(), "Creating state q0 (Initial)");
        assert_eq!(sequence[1].description(), "Creating state q1 (Accepting)");
        assert_eq!(
            sequence[2].description(),
            "Adding transition from q0 to q1 on 'a'"
        );
    }
}
