//! Domain layer for survey-wizard
//!
//! This crate contains the pure wizard state: the question catalog, the
//! answer store, and the linear cursor. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! A fixed, ordered list of questions defined at process start. Order is
//! significant: it is the traversal order of the wizard.
//!
//! ## Answer Sheet
//!
//! A mapping from question id to the current answer text. Every catalog id
//! always has an entry (empty string means "not answered"), so a payload
//! snapshot is total over the catalog at any time.
//!
//! ## Cursor
//!
//! A pointer into the catalog that only ever moves one position at a time.
//! The transition direction it records is presentation metadata (slide
//! animation hints and the like) and never feeds back into correctness.

pub mod answers;
pub mod catalog;
pub mod core;
pub mod cursor;

// Re-export commonly used types
pub use answers::{AnswerField, AnswerPayload, AnswerSheet};
pub use catalog::{Question, QuestionCatalog, QuestionId};
pub use core::{
    error::DomainError,
    validation::{ConfigIssue, Severity},
};
pub use cursor::{TransitionDirection, WizardCursor};
