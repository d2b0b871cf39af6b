//! # Containment boundary for panicking work.
//!
//! - [`recoverable`] wraps a synchronous closure;
//! - [`recoverable_future`] wraps a future;
//! - [`catch_fault`] is the primitive both are built on for async code.
//!
//! None of them retry: a panic is converted into a [`Fault`] and handed to the caller,
//! a normal return passes through untouched.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use taskmaster::recoverable;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let guarded = recoverable(
//!     || panic!("boom"),
//!     move |fault| sink.lock().unwrap().push(fault.to_string()),
//! );
//! guarded();
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["boom".to_string()]);
//! ```

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use super::Fault;

/// Returns a callable that runs `work` and reports a panic to `on_fault`.
///
/// `on_fault` is invoked at most once per call, and only when `work` panics.
pub fn recoverable<W, H>(work: W, on_fault: H) -> impl Fn()
where
    W: Fn(),
    H: Fn(Fault),
{
    move || {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| work())) {
            on_fault(Fault::from_panic(payload));
        }
    }
}

/// Polls `fut` to completion, converting a panic into `Err(Fault)`.
pub async fn catch_fault<F>(fut: F) -> Result<F::Output, Fault>
where
    F: Future,
{
    AssertUnwindSafe(fut)
        .catch_unwind()
        .await
        .map_err(Fault::from_panic)
}

/// Async counterpart of [`recoverable`].
pub async fn recoverable_future<F, H>(fut: F, on_fault: H)
where
    F: Future<Output = ()>,
    H: FnOnce(Fault),
{
    if let Err(fault) = catch_fault(fut).await {
        on_fault(fault);
    }
}
