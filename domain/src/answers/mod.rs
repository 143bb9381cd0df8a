//! The answer store and its submission snapshot.

mod payload;
mod sheet;

pub use payload::{AnswerField, AnswerPayload};
pub use sheet::AnswerSheet;
