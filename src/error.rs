//! Error types used by the supervisor.
//!
//! [`SupervisorError`] covers lifecycle misuse only. Faults raised by the work are
//! never returned to callers: they are contained, logged and counted.

use thiserror::Error;

/// # Errors produced by supervisor lifecycle operations.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorError {
    /// `start` was called on a supervisor that is already running.
    #[error("supervisor is already running")]
    AlreadyRunning,

    /// `start` was called after `stop`; a stopped supervisor cannot be restarted.
    #[error("supervisor was stopped and cannot be started again")]
    AlreadyStopped,

    /// `start` was called outside a tokio runtime.
    #[error("no tokio runtime available to spawn workers")]
    NoRuntime,
}

impl SupervisorError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskmaster::SupervisorError;
    ///
    /// assert_eq!(SupervisorError::AlreadyRunning.as_label(), "supervisor_already_running");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SupervisorError::AlreadyRunning => "supervisor_already_running",
            SupervisorError::AlreadyStopped => "supervisor_already_stopped",
            SupervisorError::NoRuntime => "supervisor_no_runtime",
        }
    }
}
