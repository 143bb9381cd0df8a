//! HTTP adapters for the form sink port.

mod dry_run;
mod sink;

pub use dry_run::DryRunSink;
pub use sink::HttpFormSink;
