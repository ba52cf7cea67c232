//! Polling policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::TrackerError;

/// Attempt budget and spacing for a bounded poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerPolicy {
    /// Maximum number of polls.
    pub max_attempts: u32,
    /// Suspension between consecutive polls.
    pub interval: Duration,
}

impl Default for TrackerPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            interval: Duration::from_millis(500),
        }
    }
}

impl TrackerPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.max_attempts == 0 {
            return Err(TrackerError::InvalidPolicy(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
