//! Shared helpers for unit tests.

use std::fmt;
use std::sync::Mutex;

use crate::logging::Logger;

/// Logger spy that keeps every line.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogger {
    /// Number of recorded lines containing `needle`.
    pub(crate) fn count(&self, needle: &str) -> usize {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    /// Copy of every recorded line, oldest first.
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.lock().unwrap().len()
    }
}

impl Logger for RecordingLogger {
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.lines.lock().unwrap().push(args.to_string());
    }
}
