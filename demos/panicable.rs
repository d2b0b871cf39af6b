//! # Example: panicable
//!
//! One worker that panics 5 seconds after it starts. The supervisor contains the
//! panic and spawns a replacement 5 seconds later, forever (up to 100 restarts).
//!
//! ## Flow
//! ```text
//! t=0s   worker starts
//! t=5s   panic → "fault[paniced!], recovering..." → "received fault"
//! t=10s  "starting new work"
//! t=15s  panic → ...
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example panicable --features logging
//! ```
//! Quit with Ctrl-C.

use std::time::Duration;

use taskmaster::{StdoutLogger, Supervisor, SupervisorConfig, WorkFn};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = SupervisorConfig::default()
        .with_restart(true)
        .with_restart_delay(Duration::from_secs(5))
        .with_max_failures(100)
        .with_max_workers(1)
        .with_logger(StdoutLogger::new());

    let panicable = WorkFn::arc(|ctx: CancellationToken| async move {
        tokio::select! {
            _ = ctx.cancelled() => {}
            _ = tokio::time::sleep(Duration::from_secs(5)) => panic!("paniced!"),
        }
    });

    let sup = Supervisor::new(panicable, cfg);
    sup.start()?;

    tokio::signal::ctrl_c().await?;
    sup.stop();
    sup.wait().await;

    println!("[main] total faults: {}", sup.fault_count());
    Ok(())
}
