//! # Spawn one worker.
//!
//! A worker is one tokio task running one copy of the work.
//!
//! ```text
//! contained (default):
//!   work.run(child) ──► Ok            → worker ends, nothing reported
//!                  └──► panic caught  → log "fault[..], recovering..."
//!                                     → send FaultSignal to the control loop
//!
//! debug:
//!   work.run(child) ──► panic unwinds to the tokio task boundary (not counted)
//! ```
//!
//! ## Rules
//! - Each worker gets a **child token** of the supervisor token.
//! - Workers are tracked in `Shared::workers` so the live count is observable.
//! - A signal sent after the control loop exited is dropped silently.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::core::state::Shared;
use crate::recover::catch_fault;

/// Notification that one worker faulted. Carries no payload.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FaultSignal;

/// Spawns one worker on the current runtime.
pub(crate) fn spawn_worker(shared: &Arc<Shared>, faults: &mpsc::Sender<FaultSignal>) {
    let work = Arc::clone(&shared.work);
    let ctx = shared.token.child_token();

    if shared.cfg.debug {
        // Join handle dropped: a panic is only reported by the panic hook.
        shared.workers.spawn(async move { work.run(ctx).await });
        return;
    }

    let me = Arc::clone(shared);
    let tx = faults.clone();
    shared.workers.spawn(async move {
        let faulted = match catch_fault(work.run(ctx)).await {
            Ok(()) => false,
            Err(fault) => {
                me.log(format_args!("fault[{fault}], recovering..."));
                true
            }
        };
        if faulted {
            let _ = tx.send(FaultSignal).await;
        }
    });
}
