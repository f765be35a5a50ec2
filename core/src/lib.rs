//! Core domain logic for Gatekeep.
//!
//! This crate contains the pieces with no runtime attached: the two field
//! grammars, the collaborator traits a form surface implements, the
//! validator side effects that drive those collaborators, and the
//! notification queue.

pub mod notifications;
pub mod surface;
pub mod validate;
mod validator;

pub use notifications::{Notification, NotificationQueue};
pub use surface::{FieldHandle, InputField, Label, LabelHandle, TriggerButton, TriggerHandle};
pub use validate::{classify, classify_email, classify_password};
pub use validator::FieldValidator;
