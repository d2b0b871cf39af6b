//! Panic containment.
//!
//! ## Contents
//! - [`Fault`] classification of captured panic payloads
//! - [`recoverable`], [`recoverable_future`], [`catch_fault`] containment wrappers

mod fault;
mod recoverable;

pub use fault::Fault;
pub use recoverable::{catch_fault, recoverable, recoverable_future};
