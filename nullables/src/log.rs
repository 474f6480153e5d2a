//! Shared chronological call log.

use std::sync::{Arc, Mutex};

/// A log of collaborator calls in the order they happened.
///
/// Cloning shares the underlying storage, so one log can be threaded
/// through several collaborators and later asked "did X happen before Y".
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Index of the first entry equal to `entry`, if any.
    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .position(|recorded| recorded == entry)
    }
}
