//! Focus and display options for rendering.

use crate::FieldKind;

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Which form element currently has input focus.
///
/// Moving focus off a field is that field's blur event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    Submit,
}

impl Focus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Submit,
            Self::Submit => Self::Email,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Email => Self::Submit,
            Self::Password => Self::Email,
            Self::Submit => Self::Password,
        }
    }

    /// The field this focus target edits, if any.
    #[must_use]
    pub const fn field(self) -> Option<FieldKind> {
        match self {
            Self::Email => Some(FieldKind::Email),
            Self::Password => Some(FieldKind::Password),
            Self::Submit => None,
        }
    }
}
