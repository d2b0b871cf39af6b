use std::fmt;
use std::sync::Arc;

/// Formatted-write sink for supervisor diagnostics.
///
/// Writes have no return value: a logger that fails handles it internally.
/// Called from worker and control-loop tasks, so implementations must not block
/// the executor for long.
pub trait Logger: Send + Sync + 'static {
    /// Writes one preformatted line.
    fn printf(&self, args: fmt::Arguments<'_>);
}

/// Logger that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentLogger;

impl Logger for SilentLogger {
    fn printf(&self, _args: fmt::Arguments<'_>) {}
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn printf(&self, args: fmt::Arguments<'_>) {
        (**self).printf(args);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn printf(&self, args: fmt::Arguments<'_>) {
        (**self).printf(args);
    }
}
