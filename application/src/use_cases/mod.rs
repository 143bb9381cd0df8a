//! Stateful controllers driving the wizard.

pub mod session;
pub mod submission_controller;

pub use session::{CommitOutcome, WizardSession};
pub use submission_controller::{SubmissionController, SubmitOutcome};
