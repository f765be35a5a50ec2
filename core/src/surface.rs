//! Collaborator contract between the form logic and whatever draws it.
//!
//! The validators and the submission controller only ever touch these
//! traits. [`InputField`], [`Label`] and [`TriggerButton`] are the in-memory
//! implementations the engine owns and the TUI renders.

use gatekeep_types::ui::TextInput;
use gatekeep_types::{FieldStatus, NonEmptyString};

/// An editable input: readable text, clearable, with a presentation status.
pub trait FieldHandle {
    fn value(&self) -> &str;
    fn clear(&mut self);
    fn set_status(&mut self, status: FieldStatus);
}

/// A caption attached to a field. Remembers the caption it was built with.
pub trait LabelHandle {
    fn set_caption(&mut self, caption: &str);
    /// Restore the caption the label was constructed with.
    fn reset_caption(&mut self);
    fn set_status(&mut self, status: FieldStatus);
}

/// The submit control. Its caption doubles as the status line.
pub trait TriggerHandle {
    fn set_caption(&mut self, caption: &str);
}

#[derive(Debug, Clone, Default)]
pub struct InputField {
    input: TextInput,
    status: FieldStatus,
}

impl InputField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    #[must_use]
    pub fn status(&self) -> FieldStatus {
        self.status
    }
}

impl FieldHandle for InputField {
    fn value(&self) -> &str {
        self.input.text()
    }

    fn clear(&mut self) {
        self.input.clear();
    }

    fn set_status(&mut self, status: FieldStatus) {
        self.status = status;
    }
}

#[derive(Debug, Clone)]
pub struct Label {
    original: NonEmptyString,
    caption: String,
    status: FieldStatus,
}

impl Label {
    #[must_use]
    pub fn new(original: NonEmptyString) -> Self {
        Self {
            caption: original.as_str().to_string(),
            original,
            status: FieldStatus::Neutral,
        }
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn original(&self) -> &str {
        self.original.as_str()
    }

    #[must_use]
    pub fn status(&self) -> FieldStatus {
        self.status
    }
}

impl LabelHandle for Label {
    fn set_caption(&mut self, caption: &str) {
        caption.clone_into(&mut self.caption);
    }

    fn reset_caption(&mut self) {
        self.original.as_str().clone_into(&mut self.caption);
    }

    fn set_status(&mut self, status: FieldStatus) {
        self.status = status;
    }
}

#[derive(Debug, Clone)]
pub struct TriggerButton {
    caption: String,
}

impl TriggerButton {
    #[must_use]
    pub fn new(caption: &str) -> Self {
        Self {
            caption: caption.to_string(),
        }
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl TriggerHandle for TriggerButton {
    fn set_caption(&mut self, caption: &str) {
        caption.clone_into(&mut self.caption);
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldHandle, InputField, Label, LabelHandle, TriggerButton, TriggerHandle};
    use gatekeep_types::{FieldStatus, NonEmptyString};

    #[test]
    fn label_reset_restores_original() {
        let mut label = Label::new(NonEmptyString::new("Email address").unwrap());
        label.set_caption("Invalid email");
        assert_eq!(label.caption(), "Invalid email");
        label.reset_caption();
        assert_eq!(label.caption(), "Email address");
        assert_eq!(label.original(), "Email address");
    }

    #[test]
    fn field_clear_keeps_status() {
        let mut field = InputField::new();
        field.input_mut().set_text("a@b");
        field.set_status(FieldStatus::Invalid);
        field.clear();
        assert_eq!(field.value(), "");
        assert_eq!(field.status(), FieldStatus::Invalid);
    }

    #[test]
    fn trigger_caption_updates() {
        let mut button = TriggerButton::new("Log-in");
        button.set_caption("Authenticating...");
        assert_eq!(button.caption(), "Authenticating...");
    }
}
