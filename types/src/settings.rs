//! Resolved configuration types shared across crates.
//!
//! These types represent fully-validated, resolved configuration state.
//! Raw TOML deserialization structs (with `Option` fields) stay in the
//! engine's config loader, which resolves them into these types at the parse
//! boundary.

use std::time::Duration;

use serde::Deserialize;

use crate::{Captions, RetriggerPolicy};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelayError {
    #[error("auth_delay_ms must be greater than zero")]
    Zero,
}

/// Length of the simulated authentication round-trip.
///
/// Invariant: non-zero (enforced via `#[serde(try_from)]` at the
/// deserialization boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct AuthDelay(Duration);

impl AuthDelay {
    pub const DEFAULT: Self = Self(Duration::from_millis(5000));

    pub fn from_millis(ms: u64) -> Result<Self, DelayError> {
        if ms == 0 {
            return Err(DelayError::Zero);
        }
        Ok(Self(Duration::from_millis(ms)))
    }

    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    #[must_use]
    pub fn as_millis(self) -> u128 {
        self.0.as_millis()
    }
}

impl TryFrom<u64> for AuthDelay {
    type Error = DelayError;

    fn try_from(ms: u64) -> Result<Self, Self::Error> {
        Self::from_millis(ms)
    }
}

impl Default for AuthDelay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything the form needs from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSettings {
    pub captions: Captions,
    pub auth_delay: AuthDelay,
    pub retrigger: RetriggerPolicy,
}
