//! Application layer for survey-wizard
//!
//! This crate contains the wizard session, the submission controller, and the
//! port definitions that the infrastructure and presentation layers plug
//! into. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SubmitParams;
pub use ports::{
    delivery_log::{DeliveryEvent, DeliveryLog, NoDeliveryLog},
    form_sink::{FormSink, SinkError},
    observer::{NullObserver, WizardEvent, WizardObserver},
};
pub use use_cases::{
    session::{CommitOutcome, WizardSession},
    submission_controller::{SubmissionController, SubmitOutcome},
};
