//! Playback: the imperative shell that drives sequences over time.
//!
//! The controller owns the single active [`PlaybackSession`] and is its only
//! writer. Timing is cooperative — advancing is either an explicit call or a
//! [`PendingTimer`] value the host waits on and fires back into the
//! controller. A generation token makes stale timers harmless.

mod controller;
mod render;

pub use controller::{
    PendingTimer, PlaybackController, PlaybackError, PlaybackPhase, PlaybackSession, TimerAction,
};
pub use render::{Highlight, RenderSink};
