//! Core domain types for Gatekeep.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod latch;
mod settings;
mod submission;
mod text;
pub mod ui;
mod validation;

pub use latch::Latch;
pub use settings::{AuthDelay, DelayError, FormSettings};
pub use submission::{CompletionId, RetriggerPolicy, SubmissionState};
pub use text::truncate_to_fit;
pub use validation::{FieldKind, FieldStatus, ValidationState};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// NonEmpty String Types
// ============================================================================

/// A string guaranteed to be non-empty (after trimming).
///
/// Used for captions: a label that renders as nothing would leave the user
/// without any hint about the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

#[derive(Debug, Error)]
#[error("caption must not be empty")]
pub struct EmptyStringError;

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyStringError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl From<NonEmptyStaticStr> for NonEmptyString {
    fn from(value: NonEmptyStaticStr) -> Self {
        Self(value.0.to_string())
    }
}

impl std::ops::Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A compile-time checked non-empty static string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonEmptyStaticStr(&'static str);

impl NonEmptyStaticStr {
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        assert!(!value.is_empty(), "NonEmptyStaticStr must not be empty");
        Self(value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

// ============================================================================
// Captions
// ============================================================================

/// Caption shown on the trigger while no submission is in flight.
pub const IDLE_CAPTION: NonEmptyStaticStr = NonEmptyStaticStr::new("Log-in");

/// Caption shown on the trigger while a submission is in flight.
pub const AUTHENTICATING_CAPTION: NonEmptyStaticStr = NonEmptyStaticStr::new("Authenticating...");

/// Original (pre-interaction) label captions for the two fields.
///
/// These are what a label returns to when its field is blanked or the form is
/// submitted. The neutral and error captions are fixed per [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captions {
    pub email: NonEmptyString,
    pub password: NonEmptyString,
}

impl Captions {
    pub const DEFAULT_EMAIL: NonEmptyStaticStr = NonEmptyStaticStr::new("Email address");
    pub const DEFAULT_PASSWORD: NonEmptyStaticStr = NonEmptyStaticStr::new("Your password");

    #[must_use]
    pub fn original(&self, kind: FieldKind) -> &NonEmptyString {
        match kind {
            FieldKind::Email => &self.email,
            FieldKind::Password => &self.password,
        }
    }
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            email: Self::DEFAULT_EMAIL.into(),
            password: Self::DEFAULT_PASSWORD.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_rejects_blank() {
        assert!(NonEmptyString::new("").is_err());
        assert!(NonEmptyString::new("   ").is_err());
        assert_eq!(NonEmptyString::new("Email").unwrap().as_str(), "Email");
    }

    #[test]
    fn non_empty_deserialize_rejects_blank() {
        let parsed: Result<NonEmptyString, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());
    }

    #[test]
    fn captions_default_by_kind() {
        let captions = Captions::default();
        assert_eq!(captions.original(FieldKind::Email).as_str(), "Email address");
        assert_eq!(
            captions.original(FieldKind::Password).as_str(),
            "Your password"
        );
    }
}
