//! Per-run generation accounting.

use crate::emit::FileSystemError;

///
/// SkipReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// Catalog descriptor arrived without a field list.
    MissingFields,
    /// Table name is in the configured exception set.
    Excepted,
}

///
/// WriteFailure
///

#[derive(Debug)]
pub struct WriteFailure {
    pub table: String,
    pub error: FileSystemError,
}

///
/// GenerationReport
///
/// Scheduled-vs-completed write tracking for one run. The completion
/// callback may only fire once `scheduled == completed` and no further
/// writes will be scheduled.
///

#[derive(Clone, Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<String>,
    pub skipped: Vec<(String, SkipReason)>,
    pub scheduled: usize,
    pub completed: usize,
}

impl GenerationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes that resolved with an error.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.completed - self.written.len()
    }

    /// True when the run scheduled no writes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.scheduled == 0
    }

    pub(crate) fn skip(&mut self, table: &str, reason: SkipReason) {
        self.skipped.push((table.to_string(), reason));
    }

    pub(crate) fn schedule(&mut self) {
        self.scheduled += 1;
    }

    pub(crate) fn complete_written(&mut self, table: &str) {
        self.completed += 1;
        self.written.push(table.to_string());
    }

    pub(crate) fn complete_failed(&mut self) {
        self.completed += 1;
    }
}
