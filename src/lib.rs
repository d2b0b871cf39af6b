//! # taskmaster
//!
//! **Taskmaster** keeps a fixed pool of tokio workers alive.
//!
//! It runs one unit of work in `max_workers` concurrent tasks, contains panics so the
//! rest of the process keeps running, optionally spawns a replacement after a delay,
//! and reports fault activity through a pluggable [`Logger`].
//!
//! ## Architecture
//! ```text
//!           ┌───────────────────────────────┐
//!           │  Supervisor::start()          │
//!           └──────┬─────────────┬──────────┘
//!                  ▼             ▼
//!     ┌──────────────┐ ┌──────────────┐    ┌──────────────────────┐
//!     │   worker 1   │ │   worker N   │    │     control loop     │
//!     │ catch_fault  │ │ catch_fault  │    │ select! {            │
//!     └──────┬───────┘ └──────┬───────┘    │   cancelled → exit   │
//!            │ panic          │ panic      │   FaultSignal → count│
//!            └───────┬────────┘            │     + delayed restart│
//!                    ▼                     │   heartbeat → log    │
//!        mpsc (capacity = max_workers) ───►│ }                    │
//!                                          └──────────┬───────────┘
//!                                                     ▼
//!                                   sleep(restart_delay) → new worker
//! ```
//!
//! ## Lifecycle
//! ```text
//! Created ──start()──► Running ──stop()──► Stopped
//! ```
//! `stop()` cancels one [`CancellationToken`](tokio_util::sync::CancellationToken):
//! the control loop exits, pending restarts are dropped, and workers see their child
//! tokens cancelled. Panics in `debug` mode are not contained at all.
//!
//! ## Features
//! | Area            | Description                                           | Key types / functions                     |
//! |-----------------|-------------------------------------------------------|-------------------------------------------|
//! | **Supervision** | Worker pool, restart policy, heartbeat.               | [`Supervisor`], [`SupervisorConfig`]      |
//! | **Containment** | Turn panics into values.                              | [`recoverable`], [`catch_fault`], [`Fault`] |
//! | **Work**        | Define the unit of work as a trait or a closure.      | [`Work`], [`WorkFn`], [`WorkRef`]         |
//! | **Logging**     | One-method formatted-write capability.                | [`Logger`], [`SilentLogger`], [`TracingLogger`] |
//! | **Errors**      | Lifecycle misuse.                                     | [`SupervisorError`]                       |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `StdoutLogger` _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use taskmaster::{Supervisor, SupervisorConfig, TracingLogger, WorkFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = SupervisorConfig::default()
//!         .with_restart(true)
//!         .with_restart_delay(Duration::from_secs(5))
//!         .with_max_failures(100)
//!         .with_logger(TracingLogger::new());
//!
//!     let sup = Supervisor::new(
//!         WorkFn::arc(|_ctx: CancellationToken| async {
//!             tokio::time::sleep(Duration::from_millis(10)).await;
//!             panic!("paniced!");
//!         }),
//!         cfg,
//!     );
//!     sup.start()?;
//!
//!     tokio::time::sleep(Duration::from_millis(50)).await;
//!     assert_eq!(sup.fault_count(), 1);
//!
//!     sup.stop();
//!     sup.wait().await;
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod logging;
mod recover;
mod work;

#[cfg(test)]
mod test_utils;

// ---- Public re-exports ----

pub use crate::core::{Supervisor, SupervisorConfig, SupervisorState};
pub use error::SupervisorError;
pub use logging::{Logger, SilentLogger, TracingLogger};
pub use recover::{Fault, catch_fault, recoverable, recoverable_future};
pub use work::{Work, WorkFn, WorkRef};

// Optional: expose a simple built-in stdout logger (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use logging::StdoutLogger;
