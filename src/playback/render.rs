//! Rendering seam between the playback controller and a visual frontend.

use crate::automaton::{StateId, Transition};
use crate::engine::SimulationEvent;
use crate::sequence::ConstructionEvent;

/// What the renderer should emphasize for the current simulation step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
    pub state: Option<StateId>,
    pub transition: Option<Transition>,
}

impl Highlight {
    /// Derive the highlight for a simulation event: the transition being
    /// taken for `Consumed`, the relevant state for everything else.
    pub fn for_event(event: &SimulationEvent) -> Self {
        match event {
            SimulationEvent::Consumed { transition, .. } => Self {
                state: None,
                transition: Some(transition.clone()),
            },
            SimulationEvent::Started { state }
            | SimulationEvent::Entered { state, .. }
            | SimulationEvent::Stuck { state, .. }
            | SimulationEvent::Accepted { state, .. }
            | SimulationEvent::Rejected { state, .. } => Self {
                state: Some(state.clone()),
                transition: None,
            },
        }
    }
}

/// Receiver for render callbacks.
///
/// Called synchronously by the controller at each step; implementations draw
/// and return, they must not block. There is no acknowledgment channel — a
/// callback that was delivered is considered rendered.
pub trait RenderSink {
    /// Remove everything drawn so far. Used before a backward-step replay
    /// and when a new automaton is loaded.
    fn clear(&mut self);

    /// Draw one construction step.
    fn construction_event(&mut self, event: &ConstructionEvent);

    /// Draw one simulation step with its highlight.
    fn simulation_event(&mut self, event: &SimulationEvent, highlight: &Highlight);
}
