//! # Control loop: reacts to faults and emits the heartbeat.
//!
//! ## Architecture
//! ```text
//! while running {
//!   select! (biased) {
//!     token.cancelled()   → exit
//!     FaultSignal         → log "received fault", faults += 1
//!                           └─ need_restart?
//!                                ├─ cap left  → restarts += 1, spawn timer:
//!                                │               sleep(restart_delay) (cancellable)
//!                                │               → log "starting new work"
//!                                │               → spawn_worker()
//!                                └─ cap spent → log "restart limit [N] reached"
//!     sleep(heartbeat)    → log "total faults [N]"
//!   }
//! }
//! ```
//!
//! ## Rules
//! - The heartbeat timeout restarts on every iteration, so it fires only after a
//!   full `heartbeat` without faults.
//! - Replacement timers are tracked in `Shared::timers`, never awaited by the loop.
//! - Cancellation wins every race: a timer never spawns a worker after `stop`.

use std::sync::Arc;

use tokio::{select, sync::mpsc, time};

use crate::core::state::Shared;
use crate::core::worker::{FaultSignal, spawn_worker};

/// Runs until the supervisor stops.
///
/// `tx` is the sending half of `rx`, kept to hand to replacement workers.
pub(crate) async fn control_loop(
    shared: Arc<Shared>,
    mut rx: mpsc::Receiver<FaultSignal>,
    tx: mpsc::Sender<FaultSignal>,
) {
    while shared.is_running() {
        select! {
            biased;
            _ = shared.token.cancelled() => break,
            Some(FaultSignal) = rx.recv() => on_fault(&shared, &tx),
            _ = time::sleep(shared.cfg.heartbeat) => {
                shared.log(format_args!("total faults [{}]", shared.faults()));
            }
        }
    }
    tracing::debug!(faults = shared.faults(), "control loop exited");
}

fn on_fault(shared: &Arc<Shared>, tx: &mpsc::Sender<FaultSignal>) {
    shared.log(format_args!("received fault"));
    shared.record_fault();

    if !shared.cfg.need_restart {
        return;
    }
    match shared.reserve_restart() {
        Some(_) => schedule_restart(shared, tx),
        None => shared.log(format_args!(
            "restart limit [{}] reached, work not restarted",
            shared.cfg.max_failures
        )),
    }
}

fn schedule_restart(shared: &Arc<Shared>, tx: &mpsc::Sender<FaultSignal>) {
    let me = Arc::clone(shared);
    let tx = tx.clone();
    shared.timers.spawn(async move {
        select! {
            biased;
            _ = me.token.cancelled() => return,
            _ = time::sleep(me.cfg.restart_delay) => {}
        }
        me.log(format_args!("starting new work"));
        spawn_worker(&me, &tx);
    });
}
