//! # Shared supervisor state.
//!
//! One [`Shared`] instance is owned by the [`Supervisor`](crate::Supervisor) handle and
//! referenced by the control loop, every worker and every pending restart timer.
//!
//! ## Rules
//! - `state` is the running flag: written by `start`/`stop`, read by the control loop.
//! - `faults` and `restarts` are written only by the control loop, read by anyone.
//! - `token` is cancelled exactly once, by `stop`.

use std::fmt;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::core::config::SupervisorConfig;
use crate::work::WorkRef;

/// Lifecycle state of a supervisor.
///
/// ```text
/// Created ──start()──► Running ──stop()──► Stopped
///    └───────────────stop()───────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupervisorState {
    /// Constructed, `start` not called yet.
    Created,
    /// Workers and control loop are live.
    Running,
    /// `stop` was called. Workers that ignore cancellation may still be running.
    Stopped,
}

impl SupervisorState {
    const fn as_u8(self) -> u8 {
        match self {
            SupervisorState::Created => 0,
            SupervisorState::Running => 1,
            SupervisorState::Stopped => 2,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => SupervisorState::Created,
            1 => SupervisorState::Running,
            _ => SupervisorState::Stopped,
        }
    }
}

impl fmt::Display for SupervisorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SupervisorState::Created => "created",
            SupervisorState::Running => "running",
            SupervisorState::Stopped => "stopped",
        })
    }
}

pub(crate) struct Shared {
    pub(crate) work: WorkRef,
    pub(crate) cfg: SupervisorConfig,
    pub(crate) token: CancellationToken,
    /// Live workers.
    pub(crate) workers: TaskTracker,
    /// Pending delayed restarts.
    pub(crate) timers: TaskTracker,
    /// The control loop.
    pub(crate) control: TaskTracker,
    state: AtomicU8,
    faults: AtomicU64,
    restarts: AtomicU64,
}

impl Shared {
    pub(crate) fn new(work: WorkRef, cfg: SupervisorConfig) -> Self {
        Self {
            work,
            cfg,
            token: CancellationToken::new(),
            workers: TaskTracker::new(),
            timers: TaskTracker::new(),
            control: TaskTracker::new(),
            state: AtomicU8::new(SupervisorState::Created.as_u8()),
            faults: AtomicU64::new(0),
            restarts: AtomicU64::new(0),
        }
    }

    pub(crate) fn log(&self, args: fmt::Arguments<'_>) {
        self.cfg.logger.printf(args);
    }

    pub(crate) fn state(&self) -> SupervisorState {
        SupervisorState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state() == SupervisorState::Running
    }

    /// Moves `Created → Running`; returns the actual state on failure.
    pub(crate) fn begin(&self) -> Result<(), SupervisorState> {
        self.state
            .compare_exchange(
                SupervisorState::Created.as_u8(),
                SupervisorState::Running.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(|_| ())
            .map_err(SupervisorState::from_u8)
    }

    /// Moves to `Stopped`; returns the previous state.
    pub(crate) fn finish(&self) -> SupervisorState {
        SupervisorState::from_u8(
            self.state
                .swap(SupervisorState::Stopped.as_u8(), Ordering::AcqRel),
        )
    }

    pub(crate) fn faults(&self) -> u64 {
        self.faults.load(Ordering::Acquire)
    }

    /// Records one fault and returns the new total.
    pub(crate) fn record_fault(&self) -> u64 {
        self.faults.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub(crate) fn restarts(&self) -> u64 {
        self.restarts.load(Ordering::Acquire)
    }

    /// Reserves one replacement under the restart cap.
    ///
    /// Returns the new restart total, or `None` once the cap is exhausted.
    pub(crate) fn reserve_restart(&self) -> Option<u64> {
        let limit = self.cfg.restart_limit().map(|n| n as u64);
        self.restarts
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| match limit {
                Some(limit) if n >= limit => None,
                _ => Some(n + 1),
            })
            .ok()
            .map(|prev| prev + 1)
    }
}
