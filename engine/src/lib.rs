//! Login form state machine for Gatekeep.
//!
//! [`App`] is the session object for one form instance. It owns the two
//! field/label pairs, the held-credential latches, the trigger, the pending
//! completions, and the notification queue. The TUI feeds it events
//! (keystrokes, focus moves, activation) and renders from its accessors.
//!
//! ```text
//! focus leaves field --> App::blur(kind) --> FieldValidator --> label/field presentation
//!                                                          \--> latch (on Valid)
//! activate on Submit --> App::trigger() --> gate on both latches
//!                                        --> clear fields, reset labels, "Authenticating..."
//!                                        --> CompletionScheduler::schedule(delay)
//! App::tick() --> drain fired completions --> "Log-in" + Notification::LoggedIn
//! ```

mod config;
mod scheduler;

pub use config::{
    AppConfig, CONFIG_PATH_ENV, ConfigError, FormConfig, GatekeepConfig, config_path,
};
pub use scheduler::{CompletionScheduler, ScheduledCompletion};

pub use gatekeep_core::{InputField, Label, Notification, TriggerButton};
pub use gatekeep_types::{
    AUTHENTICATING_CAPTION, CompletionId, FieldKind, FieldStatus, FormSettings, IDLE_CAPTION,
    RetriggerPolicy, SubmissionState, ValidationState,
    ui::{Focus, TextInput, UiOptions},
};

use tracing::{debug, info};

use gatekeep_core::{FieldHandle, FieldValidator, NotificationQueue, TriggerHandle};
use gatekeep_types::{Latch, NonEmptyString};

/// What a trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// At least one credential has never validated. Nothing changed.
    Gated,
    /// A submission is in flight and the retrigger policy disables the trigger.
    Busy,
    /// A completion was scheduled.
    Started(CompletionId),
}

/// An input and the label that describes it.
#[derive(Debug, Clone)]
struct FieldSlot {
    field: InputField,
    label: Label,
    held: Latch<String>,
}

impl FieldSlot {
    fn new(caption: NonEmptyString) -> Self {
        Self {
            field: InputField::new(),
            label: Label::new(caption),
            held: Latch::unset(),
        }
    }
}

pub struct App {
    email: FieldSlot,
    password: FieldSlot,
    trigger: TriggerButton,
    submission: SubmissionState,
    pending: Vec<ScheduledCompletion>,
    scheduler: CompletionScheduler,
    notifications: NotificationQueue,
    focus: Focus,
    settings: FormSettings,
    ui_options: UiOptions,
    tick: usize,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: FormSettings, ui_options: UiOptions) -> Self {
        Self {
            email: FieldSlot::new(settings.captions.original(FieldKind::Email).clone()),
            password: FieldSlot::new(settings.captions.original(FieldKind::Password).clone()),
            trigger: TriggerButton::new(IDLE_CAPTION.as_str()),
            submission: SubmissionState::Idle,
            pending: Vec::new(),
            scheduler: CompletionScheduler::new(),
            notifications: NotificationQueue::new(),
            focus: Focus::default(),
            settings,
            ui_options,
            tick: 0,
            should_quit: false,
        }
    }

    /// Build from a loaded config file, or defaults when there is none.
    #[must_use]
    pub fn from_config(config: Option<&GatekeepConfig>) -> Self {
        match config {
            Some(config) => Self::new(config.form_settings(), config.ui_options()),
            None => Self::new(FormSettings::default(), UiOptions::default()),
        }
    }

    fn slot(&self, kind: FieldKind) -> &FieldSlot {
        match kind {
            FieldKind::Email => &self.email,
            FieldKind::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, kind: FieldKind) -> &mut FieldSlot {
        match kind {
            FieldKind::Email => &mut self.email,
            FieldKind::Password => &mut self.password,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &InputField {
        &self.slot(kind).field
    }

    #[must_use]
    pub fn label(&self, kind: FieldKind) -> &Label {
        &self.slot(kind).label
    }

    /// The latched credential for `kind`, if that field has ever validated.
    #[must_use]
    pub fn held(&self, kind: FieldKind) -> Option<&str> {
        self.slot(kind).held.get().map(String::as_str)
    }

    #[must_use]
    pub fn trigger_caption(&self) -> &str {
        self.trigger.caption()
    }

    #[must_use]
    pub fn submission_state(&self) -> SubmissionState {
        self.submission
    }

    #[must_use]
    pub fn pending_completions(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    #[must_use]
    pub fn queued_notifications(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Field events
    // ------------------------------------------------------------------

    /// The field's blur event: classify its text and apply the outcome.
    pub fn blur(&mut self, kind: FieldKind) -> ValidationState {
        let slot = self.slot_mut(kind);
        FieldValidator::new(kind).on_blur(&mut slot.field, &mut slot.label, &mut slot.held)
    }

    /// Editable buffer of the focused field, or `None` while the trigger has focus.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        let kind = self.focus.field()?;
        Some(self.slot_mut(kind).field.input_mut())
    }

    /// Move focus, firing the blur event of the field being left.
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        if let Some(kind) = self.focus.field() {
            self.blur(kind);
        }
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Enter key: inside a field it moves on, on the trigger it submits.
    pub fn activate(&mut self) -> Option<TriggerOutcome> {
        match self.focus {
            Focus::Submit => Some(self.trigger()),
            Focus::Email | Focus::Password => {
                self.focus_next();
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Start a simulated authentication round-trip if both credentials are held.
    ///
    /// Both fields are cleared and each label goes back to its original
    /// caption. [`FieldValidator::reset`] also drops any valid or error
    /// presentation to [`FieldStatus::Neutral`], not just the caption. Only
    /// the latched credentials survive.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&mut self) -> TriggerOutcome {
        if !(self.email.held.is_set() && self.password.held.is_set()) {
            debug!("Trigger ignored: credentials not verified");
            return TriggerOutcome::Gated;
        }

        if self.submission.is_authenticating() {
            match self.settings.retrigger {
                RetriggerPolicy::Ignore => {
                    debug!("Trigger ignored: submission already in flight");
                    return TriggerOutcome::Busy;
                }
                RetriggerPolicy::Restart => {
                    for completion in self.pending.drain(..) {
                        completion.cancel();
                    }
                }
                RetriggerPolicy::Stack => {}
            }
        }

        for kind in FieldKind::ALL {
            let slot = self.slot_mut(kind);
            slot.field.clear();
            FieldValidator::reset(&mut slot.field, &mut slot.label);
        }

        self.submission = SubmissionState::Authenticating;
        self.trigger.set_caption(AUTHENTICATING_CAPTION.as_str());

        let delay = self.settings.auth_delay;
        let completion = self.scheduler.schedule(delay.as_duration());
        let id = completion.id();
        self.pending.push(completion);

        info!(
            completion = %id,
            delay_ms = delay.as_millis() as u64,
            pending = self.pending.len(),
            policy = self.settings.retrigger.as_str(),
            "Submission started"
        );
        TriggerOutcome::Started(id)
    }

    /// Advance per-frame state and run any completions whose timers fired.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        for id in self.scheduler.drain_fired() {
            self.complete(id);
        }
    }

    fn complete(&mut self, id: CompletionId) {
        let Some(index) = self.pending.iter().position(|c| c.id() == id) else {
            // Cancelled after its timer already reported.
            debug!(completion = %id, "Stale completion dropped");
            return;
        };
        self.pending.remove(index);

        self.trigger.set_caption(IDLE_CAPTION.as_str());
        if self.pending.is_empty() {
            self.submission = SubmissionState::Idle;
        }

        // Latches never clear, so both are still held.
        if let (Some(email), Some(password)) = (self.email.held.get(), self.password.held.get()) {
            self.notifications.push(Notification::LoggedIn {
                email: email.clone(),
                password: password.clone(),
            });
        }
        info!(completion = %id, pending = self.pending.len(), "Submission completed");
    }

    /// Dismiss the notification on screen. Returns false if there was none.
    pub fn dismiss_notification(&mut self) -> bool {
        self.notifications.pop().is_some()
    }

    /// Cancel every pending completion. The form stays usable afterwards.
    pub fn shutdown(&mut self) {
        for completion in self.pending.drain(..) {
            completion.cancel();
        }
        if self.submission.is_authenticating() {
            self.submission = SubmissionState::Idle;
            self.trigger.set_caption(IDLE_CAPTION.as_str());
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for completion in self.pending.drain(..) {
            completion.cancel();
        }
    }
}
