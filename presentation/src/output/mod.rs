//! Console rendering.

mod console;

pub use console::{ConsolePresenter, format_question, format_review};
