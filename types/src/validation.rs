//! Field classification outcomes.

use std::fmt;

use crate::NonEmptyStaticStr;

/// Result of classifying a field's raw text against its grammar.
///
/// Transient: recomputed on every evaluation, a pure function of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationState {
    Empty,
    Valid,
    Invalid,
}

impl ValidationState {
    #[must_use]
    pub const fn status(self) -> FieldStatus {
        match self {
            Self::Empty => FieldStatus::Neutral,
            Self::Valid => FieldStatus::Valid,
            Self::Invalid => FieldStatus::Invalid,
        }
    }
}

/// Presentation status applied to a field's input and label.
///
/// Only `Invalid` carries error styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl FieldStatus {
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// The two fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Email,
    Password,
}

impl FieldKind {
    pub const ALL: [Self; 2] = [Self::Email, Self::Password];

    /// Caption shown once the field holds a valid value.
    #[must_use]
    pub const fn valid_caption(self) -> NonEmptyStaticStr {
        match self {
            Self::Email => NonEmptyStaticStr::new("Email"),
            Self::Password => NonEmptyStaticStr::new("Password"),
        }
    }

    /// Caption shown while the field holds an invalid value.
    #[must_use]
    pub const fn invalid_caption(self) -> NonEmptyStaticStr {
        match self {
            Self::Email => NonEmptyStaticStr::new("Invalid email"),
            Self::Password => NonEmptyStaticStr::new("Invalid password"),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
