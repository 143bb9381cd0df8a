//! Wizard events emitted for the presentation layer to render
//!
//! This is the explicit rebinding contract: state mutators notify the
//! observer, and the presentation layer re-renders from the events. No
//! implicit reactivity is assumed anywhere.

use wizard_domain::TransitionDirection;

/// Events emitted by the wizard session and submission controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// The cursor moved to a different question.
    QuestionChanged {
        index: usize,
        total: usize,
        direction: TransitionDirection,
        prompt: String,
    },

    /// A submission left Idle and a request is now outstanding.
    SubmissionStarted,

    /// The endpoint acknowledged the submission; `feedback` is the transient
    /// thank-you text now showing.
    SubmissionDelivered { feedback: String },

    /// The feedback TTL elapsed and the message was cleared.
    FeedbackExpired,

    /// The submission settled with a failure. `user_visible` reflects the
    /// `surface_failures` setting: when false, presenters stay silent and
    /// only the operator channel hears about it.
    SubmissionFailed { error: String, user_visible: bool },

    /// Answers and cursor went back to their initial values after a
    /// confirmed delivery.
    WizardReset,
}

/// Observer port for wizard state changes.
pub trait WizardObserver: Send + Sync {
    fn notify(&self, event: WizardEvent);
}

/// No-op observer for tests and headless use.
pub struct NullObserver;

impl WizardObserver for NullObserver {
    fn notify(&self, _event: WizardEvent) {}
}
