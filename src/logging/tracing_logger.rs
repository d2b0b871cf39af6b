//! # TracingLogger — bridge to the `tracing` ecosystem
//!
//! Forwards each line as an `INFO` event with target `taskmaster` so supervisor
//! activity lands in whatever subscriber the host application installed
//! (`tracing-subscriber`, OpenTelemetry, …). `tracing` targets are compile-time
//! constants, so the configurable part is the `source` field attached to every event:
//! name one logger per supervisor to tell pools apart.
//!
//! ```text
//! INFO taskmaster: received fault source="ingest"
//! ```

use std::borrow::Cow;
use std::fmt;

use super::Logger;

/// Logger emitting `tracing` events.
#[derive(Clone, Debug)]
pub struct TracingLogger {
    name: Cow<'static, str>,
}

impl TracingLogger {
    /// Construct a new [`TracingLogger`] with source `"taskmaster"`.
    #[must_use]
    pub fn new() -> Self {
        Self::named("taskmaster")
    }

    /// Construct a logger whose events carry `source = name`.
    #[must_use]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Value of the `source` field.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn printf(&self, args: fmt::Arguments<'_>) {
        tracing::info!(target: "taskmaster", source = %self.name, "{}", args);
    }
}
