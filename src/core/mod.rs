//! Runtime core: the supervisor and its control loop.
//!
//! The public API from this module is [`Supervisor`], [`SupervisorConfig`] and
//! [`SupervisorState`].
//!
//! Internal modules:
//! - [`config`]: tunables and their defaults;
//! - [`state`]: shared state (running flag, counters, trackers);
//! - [`worker`]: spawns one contained (or debug) worker;
//! - [`control`]: reacts to fault signals, schedules restarts, emits the heartbeat;
//! - [`supervisor`]: the public handle (`start` / `stop` / `wait`).

mod config;
mod control;
mod state;
mod supervisor;
mod worker;

pub use config::SupervisorConfig;
pub use state::SupervisorState;
pub use supervisor::Supervisor;
