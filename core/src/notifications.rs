//! User-facing notifications.
//!
//! A completed submission surfaces exactly one [`Notification`]. The engine
//! pushes into a [`NotificationQueue`]; the TUI pops the oldest entry into a
//! modal and the user dismisses it.

use std::collections::VecDeque;

/// A notification the form raises for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A simulated authentication round-trip finished.
    LoggedIn {
        email: String,
        password: String,
    },
}

impl Notification {
    /// Format the notification as a human-readable string.
    ///
    /// Held values are embedded verbatim.
    #[must_use]
    pub fn format(&self) -> String {
        match self {
            Self::LoggedIn { email, password } => {
                format!("Hello {email} you are logged in with\nPassword: {password}")
            }
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. } => "Logged in",
        }
    }
}

/// FIFO of notifications waiting to be shown.
///
/// Unlike a dedup queue, identical entries are kept: two completions with the
/// same credentials are two separate events.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    /// The notification currently on screen, if any.
    #[must_use]
    pub fn front(&self) -> Option<&Notification> {
        self.pending.front()
    }

    /// Dismiss the notification currently on screen.
    pub fn pop(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
