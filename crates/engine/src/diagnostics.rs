//! Advisory diagnostics channel for selection runs.

use std::sync::Mutex;

/// Receiver for human-readable progress and warning lines.
///
/// The engine reports clamped parameters, per-record match details and the
/// run summary through this channel. Diagnostics are purely advisory: the
/// sink never influences the computed [`crate::SelectionResult`], and a
/// [`NullSink`] is always a valid choice.
///
/// Implementations must be `Sync` — replicates are evaluated on a rayon
/// pool and may report concurrently.
pub trait DiagnosticsSink: Sync {
    /// Receives a progress line.
    fn info(&self, message: &str);

    /// Receives a warning line (auto-corrected input, clamped parameter).
    fn warning(&self, message: &str);
}

/// Discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn info(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
}

/// Severity of a collected diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// Progress information.
    Info,
    /// Auto-corrected input or clamped parameter.
    Warning,
}

/// Collects diagnostics in memory.
///
/// Useful for tests and for callers that render progress after the run.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(DiagnosticLevel, String)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected lines in arrival order.
    pub fn entries(&self) -> Vec<(DiagnosticLevel, String)> {
        self.entries.lock().expect("diagnostics mutex poisoned").clone()
    }

    /// Returns only the warning lines.
    pub fn warnings(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(level, _)| *level == DiagnosticLevel::Warning)
            .map(|(_, message)| message)
            .collect()
    }
}

impl DiagnosticsSink for MemorySink {
    fn info(&self, message: &str) {
        self.entries
            .lock()
            .expect("diagnostics mutex poisoned")
            .push((DiagnosticLevel::Info, message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.entries
            .lock()
            .expect("diagnostics mutex poisoned")
            .push((DiagnosticLevel::Warning, message.to_string()));
    }
}
