//! Dry-run sink: log the submission instead of sending it.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;
use wizard_application::ports::form_sink::{FormSink, SinkError};
use wizard_domain::AnswerPayload;

/// Sink that accepts every submission without touching the network.
///
/// Used by `--dry-run` so a wizard walk can be exercised end to end, feedback
/// message and reset included, with no endpoint configured.
#[derive(Default)]
pub struct DryRunSink {
    deliveries: AtomicUsize,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> usize {
        self.deliveries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormSink for DryRunSink {
    async fn deliver(&self, payload: &AnswerPayload) -> Result<(), SinkError> {
        self.deliveries.fetch_add(1, Ordering::SeqCst);
        for field in payload.iter() {
            info!("dry-run field {} = {:?}", field.id, field.value);
        }
        info!(
            "dry-run submission accepted ({} fields, {} answered)",
            payload.len(),
            payload.answered()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wizard_domain::AnswerField;

    #[tokio::test]
    async fn test_always_delivers() {
        let sink = DryRunSink::new();
        let payload = AnswerPayload::new(vec![AnswerField {
            id: "say".into(),
            value: "ok".to_string(),
        }]);
        assert!(sink.deliver(&payload).await.is_ok());
        assert!(sink.deliver(&payload).await.is_ok());
        assert_eq!(sink.deliveries(), 2);
    }
}
