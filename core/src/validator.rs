use tracing::debug;

use gatekeep_types::{FieldKind, FieldStatus, Latch, ValidationState};

use crate::surface::{FieldHandle, LabelHandle};
use crate::validate::classify;

/// Applies a field's grammar on blur and drives the field/label presentation.
///
/// | outcome | label caption         | error styling | latch           |
/// |---------|-----------------------|---------------|-----------------|
/// | Empty   | original              | cleared       | untouched       |
/// | Valid   | neutral ("Email")     | cleared       | set to the text |
/// | Invalid | error ("Invalid ...") | applied       | untouched       |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidator {
    kind: FieldKind,
}

impl FieldValidator {
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self { kind }
    }

    pub fn on_blur<F, L>(
        self,
        field: &mut F,
        label: &mut L,
        held: &mut Latch<String>,
    ) -> ValidationState
    where
        F: FieldHandle + ?Sized,
        L: LabelHandle + ?Sized,
    {
        let state = classify(self.kind, field.value());
        match state {
            ValidationState::Empty => Self::reset(field, label),
            ValidationState::Valid => {
                label.set_caption(self.kind.valid_caption().as_str());
                label.set_status(state.status());
                field.set_status(state.status());
                held.set(field.value().to_string());
            }
            ValidationState::Invalid => {
                label.set_caption(self.kind.invalid_caption().as_str());
                label.set_status(state.status());
                field.set_status(state.status());
            }
        }

        match self.kind {
            FieldKind::Email => {
                debug!(field = %self.kind, value = field.value(), ?state, "Field classified");
            }
            FieldKind::Password => debug!(field = %self.kind, ?state, "Field classified"),
        }
        state
    }

    /// The Empty-outcome presentation: original caption, no error styling.
    pub fn reset<F, L>(field: &mut F, label: &mut L)
    where
        F: FieldHandle + ?Sized,
        L: LabelHandle + ?Sized,
    {
        label.reset_caption();
        label.set_status(FieldStatus::Neutral);
        field.set_status(FieldStatus::Neutral);
    }
}
