//! # Unit of work abstractions.
//!
//! - [`Work`] - trait for the job the supervisor keeps alive
//! - [`WorkFn`] - closure-backed implementation
//! - [`WorkRef`] - shared handle (`Arc<dyn Work>`)

mod unit;
mod work_fn;

pub use unit::{Work, WorkRef};
pub use work_fn::WorkFn;
