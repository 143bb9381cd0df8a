//! The question catalog: what the wizard asks, in which order.

mod catalog;
mod question;

pub use catalog::QuestionCatalog;
pub use question::{Question, QuestionId};
