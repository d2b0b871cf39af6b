//! # Function-backed work (`WorkFn`)
//!
//! [`WorkFn`] wraps a closure `F: Fn(CancellationToken) -> Fut`, producing a fresh
//! future for every worker. Restarted workers share no hidden state; use `Arc<...>`
//! inside the closure when state must survive a restart.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use taskmaster::{WorkFn, WorkRef};
//!
//! let work: WorkRef = WorkFn::arc(|ctx: CancellationToken| async move {
//!     ctx.cancelled().await;
//! });
//! # let _ = work;
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::Work;

/// Function-backed unit of work.
#[derive(Debug)]
pub struct WorkFn<F> {
    f: F,
}

impl<F> WorkFn<F> {
    /// Creates a new function-backed work.
    ///
    /// Prefer [`WorkFn::arc`] when you immediately need a [`WorkRef`](crate::WorkRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the work and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> Work for WorkFn<F>
where
    F: Fn(CancellationToken) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn run(&self, ctx: CancellationToken) {
        (self.f)(ctx).await;
    }
}
