//! # StdoutLogger — simple line printer
//!
//! Prints every supervisor line to stdout. Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [taskmaster] fault[paniced!], recovering...
//! [taskmaster] received fault
//! [taskmaster] starting new work
//! [taskmaster] total faults [4]
//! ```

use std::fmt;

use super::Logger;

/// Stdout logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutLogger;

impl StdoutLogger {
    /// Construct a new [`StdoutLogger`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for StdoutLogger {
    fn printf(&self, args: fmt::Arguments<'_>) {
        println!("[taskmaster] {args}");
    }
}
