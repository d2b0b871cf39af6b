//! # Supervisor: keeps a fixed pool of workers alive.
//!
//! The [`Supervisor`] owns the unit of work, the configuration, the fault channel and
//! the counters. `start` spawns the workers and the control loop; `stop` cancels them.
//!
//! ## High-level architecture
//! ```text
//! start():
//!   Created ──► Running
//!   mpsc::channel(cfg.fault_capacity())
//!   spawn_worker() × cfg.max_workers        (contained unless cfg.debug)
//!   spawn control_loop(rx, tx)
//!
//! Fault flow:
//!   worker panics ──► catch_fault ──► FaultSignal ──► control_loop
//!                                                       ├─ faults += 1
//!                                                       └─ delayed spawn_worker()
//!
//! stop():
//!   ──► Stopped
//!   token.cancel()  → control loop exits, pending restarts drop,
//!                     workers observe their child tokens
//! ```
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use taskmaster::{Supervisor, SupervisorConfig, WorkFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = SupervisorConfig::default()
//!         .with_restart(true)
//!         .with_restart_delay(Duration::from_millis(10))
//!         .with_max_workers(2);
//!
//!     let sup = Supervisor::new(
//!         WorkFn::arc(|ctx: CancellationToken| async move { ctx.cancelled().await }),
//!         cfg,
//!     );
//!     sup.start()?;
//!     assert!(sup.is_running());
//!
//!     sup.stop();
//!     sup.wait().await;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tokio::{runtime::Handle, sync::mpsc};

use crate::core::{
    config::SupervisorConfig,
    control::control_loop,
    state::{Shared, SupervisorState},
    worker::spawn_worker,
};
use crate::error::SupervisorError;
use crate::work::WorkRef;

/// Handle to a worker pool supervisor.
///
/// Cloning is cheap; all clones control the same supervisor.
#[derive(Clone)]
pub struct Supervisor {
    shared: Arc<Shared>,
}

impl Supervisor {
    /// Creates a supervisor for `work` with the given configuration.
    pub fn new(work: WorkRef, cfg: SupervisorConfig) -> Self {
        Self {
            shared: Arc::new(Shared::new(work, cfg)),
        }
    }

    /// Creates a supervisor with [`SupervisorConfig::default`]:
    /// one worker, no restart, silent logger.
    pub fn with_defaults(work: WorkRef) -> Self {
        Self::new(work, SupervisorConfig::default())
    }

    /// Spawns the workers and the control loop on the current tokio runtime.
    ///
    /// Returns immediately. A supervisor starts at most once:
    /// - [`SupervisorError::AlreadyRunning`] if already started,
    /// - [`SupervisorError::AlreadyStopped`] after [`stop`](Self::stop),
    /// - [`SupervisorError::NoRuntime`] outside a tokio runtime.
    pub fn start(&self) -> Result<(), SupervisorError> {
        let handle = Handle::try_current().map_err(|_| SupervisorError::NoRuntime)?;
        self.shared.begin().map_err(|actual| match actual {
            SupervisorState::Stopped => SupervisorError::AlreadyStopped,
            _ => SupervisorError::AlreadyRunning,
        })?;

        self.launch(&handle);
        Ok(())
    }

    /// Spawns workers and the control loop after a successful `begin`.
    ///
    /// Only this function closes `control` for a started supervisor, and only after
    /// the loop is registered, so `wait` cannot observe it empty before it exists.
    fn launch(&self, handle: &Handle) {
        let cfg = &self.shared.cfg;
        let (tx, rx) = mpsc::channel(cfg.fault_capacity());
        for _ in 0..cfg.max_workers {
            spawn_worker(&self.shared, &tx);
        }
        self.shared
            .control
            .spawn_on(control_loop(Arc::clone(&self.shared), rx, tx), handle);
        self.shared.control.close();

        tracing::debug!(
            workers = cfg.max_workers,
            need_restart = cfg.need_restart,
            debug = cfg.debug,
            "supervisor started"
        );
    }

    /// Requests shutdown. Idempotent, non-blocking.
    ///
    /// Ends the control loop, cancels pending restarts and cancels the token handed
    /// to every worker. Workers are not aborted: work that ignores its token keeps
    /// running. Use [`wait`](Self::wait) to observe completion.
    pub fn stop(&self) {
        let prev = self.shared.finish();
        if prev == SupervisorState::Stopped {
            return;
        }
        self.shared.token.cancel();
        if prev == SupervisorState::Created {
            // Never started: no control loop will be registered.
            self.shared.control.close();
        }
        self.shared.timers.close();
        self.shared.workers.close();

        if prev == SupervisorState::Running {
            self.shared.log(format_args!(
                "supervisor stopping, total faults [{}]",
                self.shared.faults()
            ));
        }
        tracing::debug!(faults = self.shared.faults(), "supervisor stop requested");
    }

    /// Waits until the control loop and every pending restart have exited.
    ///
    /// Resolves only after [`stop`](Self::stop). Workers are not awaited.
    pub async fn wait(&self) {
        if self.shared.state() != SupervisorState::Stopped {
            self.shared.token.cancelled().await;
        }
        self.shared.control.wait().await;
        self.shared.timers.wait().await;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SupervisorState {
        self.shared.state()
    }

    /// True between a successful `start` and `stop`.
    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    /// Faults observed by the control loop so far. Never reset.
    pub fn fault_count(&self) -> u64 {
        self.shared.faults()
    }

    /// Replacement workers scheduled so far. Never reset.
    pub fn restart_count(&self) -> u64 {
        self.shared.restarts()
    }

    /// Workers currently running.
    pub fn live_workers(&self) -> usize {
        self.shared.workers.len()
    }

    /// Replacement timers that have not fired or been cancelled yet.
    pub fn pending_restarts(&self) -> usize {
        self.shared.timers.len()
    }

    /// Configuration this supervisor was created with.
    pub fn config(&self) -> &SupervisorConfig {
        &self.shared.cfg
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio::time::sleep;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::test_utils::RecordingLogger;
    use crate::work::{WorkFn, WorkRef};

    fn always_panics() -> WorkRef {
        WorkFn::arc(|_ctx: CancellationToken| async { panic!("boom"); })
    }

    fn until_cancelled() -> WorkRef {
        WorkFn::arc(|ctx: CancellationToken| async move { ctx.cancelled().await })
    }

    fn config(logger: &Arc<RecordingLogger>) -> SupervisorConfig {
        let mut cfg = SupervisorConfig::default();
        cfg.logger = logger.clone();
        cfg
    }

    /// Lets every spawned task run, then advances virtual time by a hair.
    async fn settle() {
        sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_initial_worker_fault_is_counted() {
        let log = Arc::new(RecordingLogger::default());
        let sup = Supervisor::new(always_panics(), config(&log).with_max_workers(4));

        sup.start().unwrap();
        settle().await;

        assert_eq!(sup.fault_count(), 4);
        assert_eq!(log.count("received fault"), 4);
        assert_eq!(log.count("fault[boom], recovering..."), 4);
        assert_eq!(sup.live_workers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_restart_without_need_restart() {
        let log = Arc::new(RecordingLogger::default());
        let sup = Supervisor::new(always_panics(), config(&log).with_max_workers(2));

        sup.start().unwrap();
        sleep(Duration::from_secs(600)).await;

        assert_eq!(sup.fault_count(), 2);
        assert_eq!(sup.restart_count(), 0);
        assert_eq!(sup.pending_restarts(), 0);
        assert_eq!(log.count("starting new work"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_every_delay() {
        let log = Arc::new(RecordingLogger::default());
        let cfg = config(&log)
            .with_restart(true)
            .with_restart_delay(Duration::from_secs(5))
            .with_max_failures(0);
        let sup = Supervisor::new(always_panics(), cfg);

        sup.start().unwrap();
        settle().await;
        assert_eq!(sup.fault_count(), 1);
        assert_eq!(sup.pending_restarts(), 1);

        // Not before the delay.
        sleep(Duration::from_millis(4_900)).await;
        assert_eq!(sup.fault_count(), 1);
        assert_eq!(log.count("starting new work"), 0);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(sup.fault_count(), 2);
        assert_eq!(log.count("starting new work"), 1);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(sup.fault_count(), 3);
        assert_eq!(sup.restart_count(), 3);

        sup.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cap_is_enforced() {
        let log = Arc::new(RecordingLogger::default());
        let cfg = config(&log)
            .with_restart(true)
            .with_restart_delay(Duration::from_secs(1))
            .with_max_failures(2);
        let sup = Supervisor::new(always_panics(), cfg);

        sup.start().unwrap();
        sleep(Duration::from_secs(30)).await;

        assert_eq!(sup.fault_count(), 3);
        assert_eq!(sup.restart_count(), 2);
        assert_eq!(sup.live_workers(), 0);
        assert_eq!(log.count("restart limit [2] reached"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_normal_return_is_not_replaced() {
        let log = Arc::new(RecordingLogger::default());
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let work: WorkRef = WorkFn::arc(move |_ctx: CancellationToken| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        let cfg = config(&log)
            .with_restart(true)
            .with_restart_delay(Duration::from_secs(1))
            .with_max_workers(3);
        let sup = Supervisor::new(work, cfg);

        sup.start().unwrap();
        sleep(Duration::from_secs(10)).await;

        assert_eq!(runs.load(Ordering::SeqCst), 3);
        assert_eq!(sup.fault_count(), 0);
        assert_eq!(sup.restart_count(), 0);
        assert_eq!(sup.live_workers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_supervisor_runs_one_worker() {
        let sup = Supervisor::with_defaults(until_cancelled());

        sup.start().unwrap();
        settle().await;

        assert_eq!(sup.state(), SupervisorState::Running);
        assert_eq!(sup.live_workers(), 1);
        assert_eq!(sup.fault_count(), 0);
        assert_eq!(sup.pending_restarts(), 0);

        sup.stop();
        settle().await;
        assert_eq!(sup.live_workers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_heartbeat_reports_total() {
        let log = Arc::new(RecordingLogger::default());
        let cfg = config(&log)
            .with_max_workers(2)
            .with_heartbeat(Duration::from_secs(60));
        let sup = Supervisor::new(always_panics(), cfg);

        sup.start().unwrap();
        sleep(Duration::from_secs(59)).await;
        assert_eq!(log.count("total faults"), 0);

        sleep(Duration::from_secs(2)).await;
        assert_eq!(log.count("total faults [2]"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending_restart() {
        let log = Arc::new(RecordingLogger::default());
        let cfg = config(&log)
            .with_restart(true)
            .with_restart_delay(Duration::from_secs(5));
        let sup = Supervisor::new(always_panics(), cfg);

        sup.start().unwrap();
        sleep(Duration::from_secs(1)).await;
        assert_eq!(sup.pending_restarts(), 1);

        sup.stop();
        sup.wait().await;
        assert_eq!(sup.pending_restarts(), 0);
        // The cancelled replacement still spent its slot.
        assert_eq!(sup.restart_count(), 1);

        sleep(Duration::from_secs(30)).await;
        assert_eq!(sup.fault_count(), 1);
        assert_eq!(sup.live_workers(), 0);
        assert_eq!(log.count("starting new work"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent_and_silences_loop() {
        let log = Arc::new(RecordingLogger::default());
        let sup = Supervisor::new(until_cancelled(), config(&log));

        sup.start().unwrap();
        settle().await;

        sup.stop();
        sup.stop();
        sup.wait().await;
        assert_eq!(sup.state(), SupervisorState::Stopped);

        let lines = log.len();
        sleep(Duration::from_secs(600)).await;
        assert_eq!(log.len(), lines);
        assert_eq!(log.count("supervisor stopping"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debug_mode_does_not_contain() {
        let log = Arc::new(RecordingLogger::default());
        let cfg = config(&log).with_restart(true).with_debug(true);
        let sup = Supervisor::new(always_panics(), cfg);

        sup.start().unwrap();
        sleep(Duration::from_secs(120)).await;

        assert_eq!(sup.fault_count(), 0);
        assert_eq!(sup.restart_count(), 0);
        assert_eq!(sup.live_workers(), 0);
        assert_eq!(log.count("fault["), 0);
        assert_eq!(log.count("received fault"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_workers_share_cancellation() {
        let sup = Supervisor::new(
            until_cancelled(),
            SupervisorConfig::default().with_max_workers(3),
        );
        sup.start().unwrap();
        settle().await;
        assert_eq!(sup.live_workers(), 3);

        sup.stop();
        settle().await;
        assert_eq!(sup.live_workers(), 0);
    }

    #[tokio::test]
    async fn test_start_twice_is_rejected() {
        let sup = Supervisor::with_defaults(until_cancelled());
        sup.start().unwrap();
        assert_eq!(sup.start(), Err(SupervisorError::AlreadyRunning));

        sup.stop();
        assert_eq!(sup.start(), Err(SupervisorError::AlreadyStopped));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_covers_stop_racing_start() {
        let log = Arc::new(RecordingLogger::default());
        let sup = Supervisor::new(until_cancelled(), config(&log));

        // `stop` lands after the state flips to Running but before the loop is spawned.
        sup.shared.begin().unwrap();
        sup.stop();
        sup.launch(&Handle::current());

        sup.wait().await;
        assert_eq!(sup.shared.control.len(), 0);
        assert_eq!(sup.state(), SupervisorState::Stopped);
    }

    #[tokio::test]
    async fn test_stop_before_start() {
        let sup = Supervisor::with_defaults(until_cancelled());
        sup.stop();
        sup.wait().await;

        assert_eq!(sup.state(), SupervisorState::Stopped);
        assert_eq!(sup.start(), Err(SupervisorError::AlreadyStopped));
    }

    #[test]
    fn test_start_outside_runtime() {
        let sup = Supervisor::with_defaults(until_cancelled());
        assert_eq!(sup.start(), Err(SupervisorError::NoRuntime));
        assert_eq!(sup.state(), SupervisorState::Created);
    }
}
