//! The wizard session: one user walking the question catalog.
//!
//! Owns the answer sheet and cursor, delegates submission to the shared
//! [`SubmissionController`], and notifies the observer on every visible
//! state change. Commit is the single entry point for "the user confirmed
//! the current question": it advances on interior questions and submits on
//! the last one.

use crate::ports::observer::{NullObserver, WizardEvent, WizardObserver};
use crate::use_cases::submission_controller::{SubmissionController, SubmitOutcome};
use std::sync::Arc;
use tracing::debug;
use wizard_domain::{
    AnswerSheet, DomainError, Question, QuestionCatalog, TransitionDirection, WizardCursor,
};

/// What a commit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Not on the last question; the cursor moved forward.
    Advanced,
    /// On the last question; a submission was attempted (or dropped).
    Submitted(SubmitOutcome),
}

/// Interactive walk over a question catalog.
pub struct WizardSession {
    catalog: Arc<QuestionCatalog>,
    answers: AnswerSheet,
    cursor: WizardCursor,
    controller: Arc<SubmissionController>,
    observer: Arc<dyn WizardObserver>,
}

impl WizardSession {
    pub fn new(catalog: Arc<QuestionCatalog>, controller: Arc<SubmissionController>) -> Self {
        let answers = AnswerSheet::new(Arc::clone(&catalog));
        let cursor = WizardCursor::new(catalog.len());
        Self {
            catalog,
            answers,
            cursor,
            controller,
            observer: Arc::new(NullObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn WizardObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The question the cursor points at.
    pub fn current_question(&self) -> &Question {
        // The cursor is constructed over the catalog length and never leaves
        // [0, len), so indexing cannot fail.
        &self.catalog[self.cursor.index()]
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_first(&self) -> bool {
        self.cursor.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.cursor.is_last()
    }

    /// Direction of the most recent cursor move, for transition rendering.
    pub fn direction(&self) -> TransitionDirection {
        self.cursor.direction()
    }

    pub fn busy(&self) -> bool {
        self.controller.busy()
    }

    pub fn feedback(&self) -> Option<String> {
        self.controller.feedback()
    }

    /// Current answer text for the active question.
    pub fn answer(&self) -> &str {
        self.answers.value(self.current_question().id())
    }

    /// All answers, for review screens.
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Overwrite the answer for the active question.
    pub fn set_answer(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        let id = self.current_question().id().clone();
        self.answers.set_value(&id, text)
    }

    /// Overwrite the answer for any catalog question, regardless of the
    /// cursor. Used by non-interactive entry points.
    pub fn set_answer_for(
        &mut self,
        id: &wizard_domain::QuestionId,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.answers.set_value(id, text)
    }

    /// Move one question forward. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        let moved = self.cursor.advance();
        if moved {
            self.notify_question_changed();
        }
        moved
    }

    /// Move one question backward. Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        let moved = self.cursor.retreat();
        if moved {
            self.notify_question_changed();
        }
        moved
    }

    /// The user confirmed the current question.
    ///
    /// On interior questions this advances the cursor. On the last question
    /// it submits, unless a submission is already outstanding, in which case
    /// the commit is dropped before the controller is even asked.
    pub async fn commit(&mut self) -> CommitOutcome {
        if !self.is_last() {
            self.advance();
            return CommitOutcome::Advanced;
        }
        if self.controller.busy() {
            debug!("commit on last question dropped; submission in flight");
            return CommitOutcome::Submitted(SubmitOutcome::Ignored);
        }
        CommitOutcome::Submitted(self.submit().await)
    }

    /// Submit the current answers.
    ///
    /// On a confirmed delivery the sheet and cursor return to their initial
    /// state so the wizard is ready for the next respondent. Any failure
    /// leaves both untouched for a retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.controller.trigger(self.answers.to_payload()).await;
        if outcome == SubmitOutcome::Delivered {
            self.answers.reset();
            self.cursor.reset();
            self.observer.notify(WizardEvent::WizardReset);
        }
        outcome
    }

    fn notify_question_changed(&self) {
        self.observer.notify(WizardEvent::QuestionChanged {
            index: self.cursor.index(),
            total: self.catalog.len(),
            direction: self.cursor.direction(),
            prompt: self.current_question().prompt().to_string(),
        });
    }
}
