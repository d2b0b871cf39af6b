//! # Logging capability used by the supervisor.
//!
//! The supervisor reports through a single formatted-write operation, [`Logger::printf`].
//! Any sink can implement it: a console, a `tracing` pipeline, a test spy.
//!
//! ## Built-in loggers
//! - [`SilentLogger`] discards everything (default);
//! - [`TracingLogger`] forwards lines to `tracing::info!`;
//! - [`StdoutLogger`] prints lines to stdout (feature `logging`, demo/reference only).
//!
//! ## Example
//! ```rust
//! use std::fmt;
//! use std::sync::Mutex;
//! use taskmaster::Logger;
//!
//! #[derive(Default)]
//! struct Lines(Mutex<Vec<String>>);
//!
//! impl Logger for Lines {
//!     fn printf(&self, args: fmt::Arguments<'_>) {
//!         self.0.lock().unwrap().push(args.to_string());
//!     }
//! }
//!
//! let lines = Lines::default();
//! lines.printf(format_args!("total faults [{}]", 3));
//! assert_eq!(lines.0.lock().unwrap()[0], "total faults [3]");
//! ```

mod logger;
#[cfg(feature = "logging")]
mod stdout;
mod tracing_logger;

pub use logger::{Logger, SilentLogger};
#[cfg(feature = "logging")]
pub use stdout::StdoutLogger;
pub use tracing_logger::TracingLogger;
