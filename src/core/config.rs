//! # Supervisor configuration.
//!
//! Provides [`SupervisorConfig`], the tunables passed to
//! [`Supervisor::new`](crate::Supervisor::new).
//!
//! ## Sentinel values
//! - `max_failures = 0` → unlimited restarts
//! - `max_workers = 0` → no worker is spawned; the fault channel still gets capacity 1

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::logging::{Logger, SilentLogger};

/// Configuration for a [`Supervisor`](crate::Supervisor).
///
/// ## Field semantics
/// - `need_restart`: replace a worker after it panics
/// - `restart_delay`: wait between the fault and the replacement
/// - `max_failures`: cap on replacements over the supervisor lifetime (`0` = unlimited)
/// - `max_workers`: workers spawned by `start`, and the fault channel capacity
/// - `logger`: diagnostic sink
/// - `debug`: do not contain panics
/// - `heartbeat`: idle period after which the control loop logs the fault total
#[derive(Clone)]
pub struct SupervisorConfig {
    /// Replace a faulted worker with a fresh one.
    pub need_restart: bool,

    /// Delay before a replacement worker is spawned.
    pub restart_delay: Duration,

    /// Maximum number of replacements (`0` = unlimited).
    ///
    /// Once reached, further faults are still counted and logged but no longer
    /// answered with a restart. A slot is spent when the restart is scheduled, so a
    /// replacement cancelled by `stop` before its delay elapsed still counts.
    pub max_failures: usize,

    /// Number of concurrently running copies of the work spawned by `start`.
    pub max_workers: usize,

    /// Sink for diagnostic lines.
    pub logger: Arc<dyn Logger>,

    /// When `true`, panics are not contained.
    ///
    /// A panicking worker unwinds to the tokio task boundary, the panic hook reports it,
    /// and the supervisor neither counts nor restarts it. Use it to see where a panic
    /// happens.
    pub debug: bool,

    /// Heartbeat timeout of the control loop.
    pub heartbeat: Duration,
}

impl SupervisorConfig {
    /// Returns the restart cap as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → at most `n` replacements
    #[inline]
    pub fn restart_limit(&self) -> Option<usize> {
        if self.max_failures == 0 {
            None
        } else {
            Some(self.max_failures)
        }
    }

    /// Returns the fault channel capacity clamped to a minimum of 1.
    #[inline]
    pub fn fault_capacity(&self) -> usize {
        self.max_workers.max(1)
    }

    /// Sets [`need_restart`](Self::need_restart).
    pub fn with_restart(mut self, need_restart: bool) -> Self {
        self.need_restart = need_restart;
        self
    }

    /// Sets [`restart_delay`](Self::restart_delay).
    pub fn with_restart_delay(mut self, delay: Duration) -> Self {
        self.restart_delay = delay;
        self
    }

    /// Sets [`max_failures`](Self::max_failures).
    pub fn with_max_failures(mut self, max_failures: usize) -> Self {
        self.max_failures = max_failures;
        self
    }

    /// Sets [`max_workers`](Self::max_workers).
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Sets [`logger`](Self::logger).
    pub fn with_logger(mut self, logger: impl Logger) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Sets [`debug`](Self::debug).
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets [`heartbeat`](Self::heartbeat).
    pub fn with_heartbeat(mut self, heartbeat: Duration) -> Self {
        self.heartbeat = heartbeat;
        self
    }
}

impl Default for SupervisorConfig {
    /// Default configuration:
    ///
    /// - `need_restart = false`
    /// - `restart_delay = 60s`
    /// - `max_failures = 3`
    /// - `max_workers = 1`
    /// - `logger = SilentLogger`
    /// - `debug = false`
    /// - `heartbeat = 60s`
    fn default() -> Self {
        Self {
            need_restart: false,
            restart_delay: Duration::from_secs(60),
            max_failures: 3,
            max_workers: 1,
            logger: Arc::new(SilentLogger),
            debug: false,
            heartbeat: Duration::from_secs(60),
        }
    }
}

impl fmt::Debug for SupervisorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupervisorConfig")
            .field("need_restart", &self.need_restart)
            .field("restart_delay", &self.restart_delay)
            .field("max_failures", &self.max_failures)
            .field("max_workers", &self.max_workers)
            .field("debug", &self.debug)
            .field("heartbeat", &self.heartbeat)
            .finish_non_exhaustive()
    }
}
