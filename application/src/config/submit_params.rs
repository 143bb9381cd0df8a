//! Submission parameters.
//!
//! Everything the submission controller needs to know about the outside
//! world, injected at construction. The endpoint URL in particular is never
//! a literal inside controller code; it always arrives through here.

use std::time::Duration;

/// How long the thank-you message stays on screen.
pub const DEFAULT_FEEDBACK_TTL: Duration = Duration::from_millis(2000);

/// Default thank-you text shown after a delivered submission.
pub const DEFAULT_FEEDBACK_TEXT: &str = "Thanks for your feedback!";

/// Injected configuration for the submission controller.
#[derive(Debug, Clone)]
pub struct SubmitParams {
    endpoint: String,
    feedback_ttl: Duration,
    feedback_text: String,
    surface_failures: bool,
}

impl SubmitParams {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            feedback_ttl: DEFAULT_FEEDBACK_TTL,
            feedback_text: DEFAULT_FEEDBACK_TEXT.to_string(),
            surface_failures: false,
        }
    }

    /// How long the feedback message stays up before the expiry task clears
    /// it.
    pub fn with_feedback_ttl(mut self, ttl: Duration) -> Self {
        self.feedback_ttl = ttl;
        self
    }

    pub fn with_feedback_text(mut self, text: impl Into<String>) -> Self {
        self.feedback_text = text.into();
        self
    }

    /// Whether submission failures are surfaced to the end user. Off by
    /// default; the operator channel hears about failures either way.
    pub fn with_surface_failures(mut self, surface: bool) -> Self {
        self.surface_failures = surface;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn feedback_ttl(&self) -> Duration {
        self.feedback_ttl
    }

    pub fn feedback_text(&self) -> &str {
        &self.feedback_text
    }

    pub fn surface_failures(&self) -> bool {
        self.surface_failures
    }
}
