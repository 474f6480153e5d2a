//! Pause flag with strict transitions.

use serde::{Deserialize, Serialize};

use crate::error::JobError;

/// A boolean pause flag that rejects no-op transitions.
///
/// Starts unpaused. Who may flip it is the caller's concern
/// (`RebalanceJob` gates it behind the governor check).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseState {
    paused: bool,
}

impl PauseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Flip the flag. Setting it to its current value is rejected, so every
    /// committed transition is an actual change.
    pub fn set(&mut self, paused: bool) -> Result<(), JobError> {
        if self.paused == paused {
            return Err(JobError::NoOpPauseTransition { paused });
        }
        self.paused = paused;
        Ok(())
    }
}
