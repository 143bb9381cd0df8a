//! Presentation layer for survey-wizard
//!
//! This crate contains the CLI argument definitions, the console presenter
//! that renders wizard events, and the interactive wizard REPL.

pub mod cli;
pub mod output;
pub mod wizard;

// Re-export commonly used types
pub use cli::Cli;
pub use output::ConsolePresenter;
pub use wizard::WizardRepl;
