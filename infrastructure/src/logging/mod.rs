//! Logging adapters.

mod jsonl_log;

pub use jsonl_log::JsonlDeliveryLog;
