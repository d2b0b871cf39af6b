//! # The unit of work.
//!
//! A [`Work`] is run once per worker. It produces nothing: finishing normally ends the
//! worker, panicking is a fault the supervisor contains and may answer with a restart.
//!
//! The [`CancellationToken`] is cancelled when the supervisor stops. Long-running work
//! should watch it to exit cooperatively; work that ignores it keeps running.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Shared handle to a unit of work.
pub type WorkRef = Arc<dyn Work>;

/// # Asynchronous unit of work.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use taskmaster::Work;
///
/// struct Poller;
///
/// #[async_trait]
/// impl Work for Poller {
///     async fn run(&self, ctx: CancellationToken) {
///         while !ctx.is_cancelled() {
///             // poll something...
///             tokio::time::sleep(std::time::Duration::from_millis(100)).await;
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Work: Send + Sync + 'static {
    /// Executes one copy of the work.
    async fn run(&self, ctx: CancellationToken);
}
