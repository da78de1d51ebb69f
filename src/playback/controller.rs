//! Cooperative, timer-driven playback of construction and simulation
//! sequences.

use crate::automaton::{Automaton, ValidationError};
use crate::engine::{check_input, InputError, Simulation};
use crate::playback::render::{Highlight, RenderSink};
use crate::sequence::{build_sequence, ConstructionEvent};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

/// Construction steps run faster than simulation steps by this factor.
const CONSTRUCTION_CADENCE: f64 = 1.5;

const DEFAULT_SPEED: Duration = Duration::from_millis(1000);

/// Where the controller currently is in the playback lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Constructing,
    ConstructionComplete,
    Simulating,
    SimulationComplete,
}

/// Errors returned by [`PlaybackController::run_simulation`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    #[error("no automaton loaded")]
    NoAutomatonLoaded,

    #[error(transparent)]
    Input(#[from] InputError),
}

/// What a fired timer should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    AdvanceConstruction,
    AdvanceSimulation,
}

/// A scheduled advance, captured as a value.
///
/// The host takes the timer, waits out `delay`, then hands it back through
/// [`PlaybackController::fire_timer`]. The generation captured at schedule
/// time makes a timer that outlives a `cancel`/`load`/`run_simulation` a
/// guaranteed no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTimer {
    generation: u64,
    delay: Duration,
    action: TimerAction,
}

impl PendingTimer {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn action(&self) -> TimerAction {
        self.action
    }
}

/// Per-loaded-automaton playback state.
///
/// Created by [`PlaybackController::load`] and owned exclusively by the
/// controller; external callers observe it only through controller
/// accessors.
pub struct PlaybackSession {
    automaton: Automaton,
    sequence: Vec<ConstructionEvent>,
    /// `None` = not started (the construction has no rendered steps yet)
    step: Option<usize>,
    phase: PlaybackPhase,
    simulation: Option<Simulation>,
}

impl PlaybackSession {
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn sequence(&self) -> &[ConstructionEvent] {
        &self.sequence
    }

    pub fn step_index(&self) -> Option<usize> {
        self.step
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }
}

/// Single-threaded cooperative scheduler for construction and simulation
/// playback.
///
/// The controller is the sole writer of its session; "suspension" between
/// steps is a [`PendingTimer`] value rather than a blocked thread. Drive it
/// either manually (`take_timer` + `fire_timer`) or with the async
/// [`run_pending`](Self::run_pending) loop.
///
/// # Example
///
/// ```rust
/// use dfastage::automaton::{AutomatonBuilder, State};
/// use dfastage::playback::{PlaybackController, PlaybackPhase, RenderSink, Highlight};
/// use dfastage::sequence::ConstructionEvent;
/// use dfastage::engine::SimulationEvent;
///
/// struct Noop;
/// impl RenderSink for Noop {
///     fn clear(&mut self) {}
///     fn construction_event(&mut self, _: &ConstructionEvent) {}
///     fn simulation_event(&mut self, _: &SimulationEvent, _: &Highlight) {}
/// }
///
/// let automaton = AutomatonBuilder::new("Loop")
///     .state(State::new("q0", 0.0, 0.0).initial().accepting())
///     .transition("q0", "q0", 'a')
///     .alphabet(['a'])
///     .build()
///     .unwrap();
///
/// let mut controller = PlaybackController::new(Noop);
/// controller.set_auto_play(false);
/// controller.load(automaton).unwrap();
/// controller.step_forward(); // q0 drawn
/// controller.step_forward(); // self-loop drawn, construction complete
/// assert_eq!(controller.phase(), PlaybackPhase::ConstructionComplete);
/// ```
pub struct PlaybackController<R: RenderSink> {
    renderer: R,
    session: Option<PlaybackSession>,
    speed: Duration,
    auto_play: bool,
    generation: u64,
    pending: Option<PendingTimer>,
}

impl<R: RenderSink> PlaybackController<R> {
    /// Create a controller with auto-play on and the default 1s cadence.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            session: None,
            speed: DEFAULT_SPEED,
            auto_play: true,
            generation: 0,
            pending: None,
        }
    }

    /// Load an automaton, replacing any active session.
    ///
    /// Validation failures reject the automaton before any state change:
    /// the previous session, rendered output and timers stay untouched.
    pub fn load(&mut self, automaton: Automaton) -> Result<(), ValidationError> {
        automaton.validate()?;

        self.generation += 1;
        self.pending = None;
        debug!(name = %automaton.name, "loading automaton");

        let sequence = build_sequence(&automaton);
        self.session = Some(PlaybackSession {
            automaton,
            sequence,
            step: None,
            phase: PlaybackPhase::Idle,
            simulation: None,
        });
        self.renderer.clear();

        if self.auto_play {
            self.step_forward();
        }
        Ok(())
    }

    /// Advance the construction by one step.
    ///
    /// Ignored while simulating. At the end of the sequence this settles in
    /// `ConstructionComplete` and further calls are no-ops. With auto-play
    /// on, each step before the last schedules the next advance.
    pub fn step_forward(&mut self) {
        self.pending = None;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase == PlaybackPhase::Simulating {
            return;
        }

        let len = session.sequence.len();
        let next = match session.step {
            None => 0,
            Some(index) => index + 1,
        };
        if next >= len {
            session.phase = PlaybackPhase::ConstructionComplete;
            return;
        }

        session.step = Some(next);
        let at_last = next + 1 == len;
        session.phase = if at_last {
            PlaybackPhase::ConstructionComplete
        } else {
            PlaybackPhase::Constructing
        };
        self.renderer.construction_event(&session.sequence[next]);

        if self.auto_play && !at_last {
            self.pending = Some(PendingTimer {
                generation: self.generation,
                delay: self.speed.mul_f64(1.0 / CONSTRUCTION_CADENCE),
                action: TimerAction::AdvanceConstruction,
            });
        }
    }

    /// Step the construction back by one.
    ///
    /// There is no incremental undo of a rendered frame: the sink is cleared
    /// and the prefix up to the new index is replayed from the start.
    /// Construction sequences are short, so the O(n) replay is acceptable.
    pub fn step_backward(&mut self) {
        self.pending = None;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase == PlaybackPhase::Simulating {
            return;
        }
        let Some(current) = session.step else {
            return;
        };

        session.step = current.checked_sub(1);
        self.renderer.clear();

        match session.step {
            Some(index) => {
                for event in &session.sequence[..=index] {
                    self.renderer.construction_event(event);
                }
                session.phase = if index + 1 == session.sequence.len() {
                    PlaybackPhase::ConstructionComplete
                } else {
                    PlaybackPhase::Constructing
                };
            }
            None => session.phase = PlaybackPhase::Idle,
        }
    }

    /// Run the loaded automaton over `input`, animating each step.
    ///
    /// The full construction is redrawn first, then one simulation event is
    /// rendered per cadence tick. A terminal event renders without
    /// scheduling anything further and the sequence is discarded.
    ///
    /// Input is pre-checked against the alphabet; on
    /// [`InputError::InvalidSymbol`] no engine sequence is created and the
    /// session is unchanged.
    pub fn run_simulation(&mut self, input: &str) -> Result<(), PlaybackError> {
        let Some(session) = self.session.as_mut() else {
            return Err(PlaybackError::NoAutomatonLoaded);
        };
        check_input(&session.automaton, input)?;

        self.generation += 1;
        self.pending = None;
        debug!(automaton = %session.automaton.name, input, "starting simulation");

        self.renderer.clear();
        for event in &session.sequence {
            self.renderer.construction_event(event);
        }

        session.simulation = Some(Simulation::new(session.automaton.clone(), input));
        session.phase = PlaybackPhase::Simulating;
        session.step = session.sequence.len().checked_sub(1);

        self.advance_simulation();
        Ok(())
    }

    /// Pull and render the next simulation event.
    fn advance_simulation(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(simulation) = session.simulation.as_mut() else {
            return;
        };

        match simulation.next() {
            Some(event) => {
                let highlight = Highlight::for_event(&event);
                self.renderer.simulation_event(&event, &highlight);

                if event.is_terminal() {
                    trace!(?event, "simulation finished");
                    session.simulation = None;
                    session.phase = PlaybackPhase::SimulationComplete;
                } else {
                    self.pending = Some(PendingTimer {
                        generation: self.generation,
                        delay: self.speed,
                        action: TimerAction::AdvanceSimulation,
                    });
                }
            }
            None => {
                session.simulation = None;
                session.phase = PlaybackPhase::SimulationComplete;
            }
        }
    }

    /// Invalidate any pending timer and discard an in-flight simulation.
    ///
    /// Idempotent and safe in every phase. A timer already taken by the
    /// host becomes stale and will be dropped by [`fire_timer`](Self::fire_timer).
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
        if let Some(session) = self.session.as_mut() {
            session.simulation = None;
            if session.phase == PlaybackPhase::Simulating {
                // Construction is still fully rendered underneath.
                session.phase = PlaybackPhase::ConstructionComplete;
            }
        }
    }

    /// Set the cadence for subsequently scheduled steps.
    ///
    /// An already-scheduled timer keeps the delay captured when it was
    /// scheduled.
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Toggle auto-play.
    ///
    /// Enabling mid-construction resumes advancing immediately. Disabling
    /// only stops future scheduling; a timer already in flight still fires,
    /// so at most one more step may render.
    pub fn set_auto_play(&mut self, enabled: bool) {
        self.auto_play = enabled;
        if !enabled {
            return;
        }

        let resumable = self.session.as_ref().is_some_and(|s| {
            s.phase != PlaybackPhase::Simulating
                && !s.sequence.is_empty()
                && s.step.is_none_or(|i| i + 1 < s.sequence.len())
        });
        if resumable {
            self.step_forward();
        }
    }

    /// Take the scheduled timer, if any, to wait on it.
    pub fn take_timer(&mut self) -> Option<PendingTimer> {
        self.pending.take()
    }

    /// The scheduled timer, if any, without consuming it.
    pub fn pending_timer(&self) -> Option<&PendingTimer> {
        self.pending.as_ref()
    }

    /// Hand a waited-out timer back to the controller.
    ///
    /// A timer whose generation no longer matches (a `cancel`, `load` or
    /// `run_simulation` happened since it was scheduled) is dropped without
    /// rendering or mutating anything.
    pub fn fire_timer(&mut self, timer: PendingTimer) {
        if timer.generation != self.generation {
            trace!(action = ?timer.action, "dropping stale timer");
            return;
        }
        match timer.action {
            TimerAction::AdvanceConstruction => self.step_forward(),
            TimerAction::AdvanceSimulation => self.advance_simulation(),
        }
    }

    /// Wait out and fire scheduled timers until none remain.
    ///
    /// This is the async driver for unattended playback: each iteration
    /// sleeps for the timer's captured delay, then fires it, which may
    /// schedule the next one.
    pub async fn run_pending(&mut self) {
        while let Some(timer) = self.take_timer() {
            tokio::time::sleep(timer.delay).await;
            self.fire_timer(timer);
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.session
            .as_ref()
            .map_or(PlaybackPhase::Idle, |s| s.phase)
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    /// Access the render sink (e.g. to read back what a recording sink saw).
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
