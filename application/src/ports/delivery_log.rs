//! Port for the operator-visible delivery log.
//!
//! Defines the [`DeliveryLog`] trait for recording submission lifecycle
//! events (started, delivered, failed) in a machine-readable format.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a structured record
//! of every delivery attempt (JSONL in the default adapter). End users never
//! see this channel.

use serde_json::Value;

/// A structured delivery event for logging.
pub struct DeliveryEvent {
    /// Event type identifier (e.g. "submission_started", "submission_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DeliveryEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording delivery events.
///
/// The `record` method is intentionally synchronous and non-fallible so that
/// logging can never disrupt a submission; failures are silently ignored.
pub trait DeliveryLog: Send + Sync {
    fn record(&self, event: DeliveryEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDeliveryLog;

impl DeliveryLog for NoDeliveryLog {
    fn record(&self, _event: DeliveryEvent) {}
}
