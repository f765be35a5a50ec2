use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a simulated authentication round-trip is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Authenticating,
}

impl SubmissionState {
    #[must_use]
    pub const fn is_authenticating(self) -> bool {
        matches!(self, Self::Authenticating)
    }
}

/// What a trigger does while a completion is already pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetriggerPolicy {
    /// The trigger is disabled until the pending completion fires.
    #[default]
    Ignore,
    /// The pending completion is cancelled and a fresh one scheduled.
    Restart,
    /// Another completion is scheduled alongside the pending one; both fire.
    Stack,
}

impl RetriggerPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Restart => "restart",
            Self::Stack => "stack",
        }
    }
}

/// Identifies one scheduled completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompletionId(u64);

impl CompletionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for CompletionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{CompletionId, RetriggerPolicy};

    #[test]
    fn retrigger_policy_parses_lowercase() {
        let policy: RetriggerPolicy = serde_json::from_str("\"restart\"").unwrap();
        assert_eq!(policy, RetriggerPolicy::Restart);
        assert!(serde_json::from_str::<RetriggerPolicy>("\"Restart\"").is_err());
        assert_eq!(RetriggerPolicy::default(), RetriggerPolicy::Ignore);
    }

    #[test]
    fn completion_ids_advance() {
        let id = CompletionId::new(7);
        assert_eq!(id.next(), CompletionId::new(8));
        assert_eq!(id.to_string(), "7");
    }
}
