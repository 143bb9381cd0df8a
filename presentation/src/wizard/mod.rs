//! Interactive wizard.

mod repl;

pub use repl::WizardRepl;
