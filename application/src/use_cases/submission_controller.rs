//! Submission controller.
//!
//! State machine with states **Idle** and **Submitting**, plus a transient
//! feedback overlay on Idle. At most one exchange is outstanding at any
//! time: the busy gate is an atomic compare-exchange, so a second trigger
//! while Submitting is dropped without issuing a request, never queued.
//!
//! The feedback message set after a delivery is cleared by a scheduled task
//! guarded by a [`CancellationToken`]; re-triggering or dropping the
//! controller cancels any pending expiry so a stale timer can never clear a
//! newer message.

use crate::config::SubmitParams;
use crate::ports::delivery_log::{DeliveryEvent, DeliveryLog, NoDeliveryLog};
use crate::ports::form_sink::{FormSink, SinkError};
use crate::ports::observer::{NullObserver, WizardEvent, WizardObserver};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use wizard_domain::AnswerPayload;

/// How a trigger call settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint acknowledged with a success status.
    Delivered,
    /// Transport or application failure; the caller's answers are preserved
    /// so the user can retry.
    Failed(SinkError),
    /// A submission was already in flight; no request was issued.
    Ignored,
}

/// Orchestrates serialization, the network exchange, busy state, and the
/// transient feedback message.
pub struct SubmissionController {
    sink: Arc<dyn FormSink>,
    params: SubmitParams,
    observer: Arc<dyn WizardObserver>,
    delivery_log: Arc<dyn DeliveryLog>,
    busy: AtomicBool,
    feedback: Arc<Mutex<Option<String>>>,
    expiry: Mutex<Option<CancellationToken>>,
}

impl SubmissionController {
    pub fn new(sink: Arc<dyn FormSink>, params: SubmitParams) -> Self {
        Self {
            sink,
            params,
            observer: Arc::new(NullObserver),
            delivery_log: Arc::new(NoDeliveryLog),
            busy: AtomicBool::new(false),
            feedback: Arc::new(Mutex::new(None)),
            expiry: Mutex::new(None),
        }
    }

    /// Attach an observer for submission lifecycle events.
    pub fn with_observer(mut self, observer: Arc<dyn WizardObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Attach an operator-visible delivery log.
    pub fn with_delivery_log(mut self, log: Arc<dyn DeliveryLog>) -> Self {
        self.delivery_log = log;
        self
    }

    pub fn params(&self) -> &SubmitParams {
        &self.params
    }

    /// True exactly while a network exchange is outstanding. The single
    /// signal driving control disablement in the presentation layer.
    pub fn busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// The transient feedback message, if one is currently showing.
    pub fn feedback(&self) -> Option<String> {
        self.feedback.lock().ok().and_then(|slot| slot.clone())
    }

    /// Submit one answer snapshot.
    ///
    /// Only valid from Idle; while Submitting every further call returns
    /// [`SubmitOutcome::Ignored`] without touching the sink. The busy flag
    /// clears when the exchange settles, success or failure.
    pub async fn trigger(&self, payload: AnswerPayload) -> SubmitOutcome {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("submission already in flight; trigger dropped");
            return SubmitOutcome::Ignored;
        }

        info!(
            "submitting {} fields ({} answered)",
            payload.len(),
            payload.answered()
        );
        self.observer.notify(WizardEvent::SubmissionStarted);
        self.delivery_log.record(DeliveryEvent::new(
            "submission_started",
            serde_json::json!({
                "fields": payload.len(),
                "answered": payload.answered(),
            }),
        ));

        let result = self.sink.deliver(&payload).await;
        // Clear busy before anything else: the gate must reopen on every
        // outcome, including panicky observers downstream.
        self.busy.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => {
                info!("submission delivered");
                self.delivery_log.record(DeliveryEvent::new(
                    "submission_delivered",
                    serde_json::to_value(&payload).unwrap_or_default(),
                ));
                self.show_feedback();
                SubmitOutcome::Delivered
            }
            Err(e) => {
                warn!("submission failed: {e}");
                self.delivery_log.record(DeliveryEvent::new(
                    "submission_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
                self.observer.notify(WizardEvent::SubmissionFailed {
                    error: e.to_string(),
                    user_visible: self.params.surface_failures(),
                });
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Set the feedback message and schedule its expiry.
    fn show_feedback(&self) {
        let text = self.params.feedback_text().to_string();
        if let Ok(mut slot) = self.feedback.lock() {
            *slot = Some(text.clone());
        }
        self.observer
            .notify(WizardEvent::SubmissionDelivered { feedback: text });

        let token = CancellationToken::new();
        if let Ok(mut pending) = self.expiry.lock() {
            // A fresh message restarts the clock; the old timer must not
            // fire against it.
            if let Some(previous) = pending.replace(token.clone()) {
                previous.cancel();
            }
        }

        let ttl = self.params.feedback_ttl();
        let feedback = Arc::clone(&self.feedback);
        let observer = Arc::clone(&self.observer);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(ttl) => {
                    if let Ok(mut slot) = feedback.lock() {
                        slot.take();
                    }
                    observer.notify(WizardEvent::FeedbackExpired);
                }
            }
        });
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        // Teardown cancels any pending expiry task.
        if let Ok(mut pending) = self.expiry.lock()
            && let Some(token) = pending.take()
        {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::Notify;
    use wizard_domain::{AnswerSheet, Question, QuestionCatalog};

    // ==================== Test Mocks ====================

    /// Sink with a scripted outcome that records every payload it sees.
    struct MockSink {
        outcome: Result<(), SinkError>,
        deliveries: Mutex<Vec<AnswerPayload>>,
    }

    impl MockSink {
        fn ok() -> Self {
            Self {
                outcome: Ok(()),
                deliveries: Mutex::new(Vec::new()),
            }
        }

        fn rejected(status: u16) -> Self {
            Self {
                outcome: Err(SinkError::Rejected { status }),
                deliveries: Mutex::new(Vec::new()),
            }
        }

        fn delivery_count(&self) -> usize {
            self.deliveries.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl FormSink for MockSink {
        async fn deliver(&self, payload: &AnswerPayload) -> Result<(), SinkError> {
            self.deliveries.lock().unwrap().push(payload.clone());
            self.outcome.clone()
        }
    }

    /// Sink that parks inside `deliver` until released, to hold the
    /// controller in Submitting.
    struct BlockingSink {
        entered: Notify,
        release: Notify,
        calls: AtomicUsize,
    }

    impl BlockingSink {
        fn new() -> Self {
            Self {
                entered: Notify::new(),
                release: Notify::new(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FormSink for BlockingSink {
        async fn deliver(&self, _payload: &AnswerPayload) -> Result<(), SinkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            self.release.notified().await;
            Ok(())
        }
    }

    struct RecordingObserver {
        events: Mutex<Vec<WizardEvent>>,
    }

    impl RecordingObserver {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<WizardEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl WizardObserver for RecordingObserver {
        fn notify(&self, event: WizardEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn payload() -> AnswerPayload {
        let catalog = Arc::new(QuestionCatalog::new(vec![
            Question::new("say", "Say something"),
            Question::new("think", "Think something"),
        ]));
        let mut sheet = AnswerSheet::new(catalog);
        sheet.set_value(&"say".into(), "ok").unwrap();
        sheet.to_payload()
    }

    fn params() -> SubmitParams {
        SubmitParams::new("https://example.test/ingest")
            .with_feedback_ttl(Duration::from_millis(40))
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_delivered_sets_feedback_then_expires() {
        let sink = Arc::new(MockSink::ok());
        let observer = Arc::new(RecordingObserver::new());
        let controller = SubmissionController::new(sink.clone(), params())
            .with_observer(observer.clone());

        let outcome = controller.trigger(payload()).await;
        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert!(!controller.busy());
        assert_eq!(sink.delivery_count(), 1);
        assert!(controller.feedback().is_some());

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(controller.feedback().is_none());

        let events = observer.events();
        assert!(events.contains(&WizardEvent::SubmissionStarted));
        assert!(events.contains(&WizardEvent::FeedbackExpired));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, WizardEvent::SubmissionDelivered { .. }))
        );
    }

    #[tokio::test]
    async fn test_failure_clears_busy_and_sets_no_feedback() {
        let sink = Arc::new(MockSink::rejected(500));
        let observer = Arc::new(RecordingObserver::new());
        let controller = SubmissionController::new(sink.clone(), params())
            .with_observer(observer.clone());

        let outcome = controller.trigger(payload()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SinkError::Rejected { status: 500 })
        );
        assert!(!controller.busy());
        assert!(controller.feedback().is_none());

        // With surfacing off, failures stay off the end-user channel.
        let events = observer.events();
        assert!(events.iter().any(|e| matches!(
            e,
            WizardEvent::SubmissionFailed {
                user_visible: false,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn test_failure_surfaced_when_configured() {
        let sink = Arc::new(MockSink::rejected(503));
        let observer = Arc::new(RecordingObserver::new());
        let controller = SubmissionController::new(
            sink,
            params().with_surface_failures(true),
        )
        .with_observer(observer.clone());

        controller.trigger(payload()).await;
        assert!(observer.events().iter().any(|e| matches!(
            e,
            WizardEvent::SubmissionFailed {
                user_visible: true,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn test_second_trigger_while_busy_is_dropped() {
        let sink = Arc::new(BlockingSink::new());
        let controller = Arc::new(SubmissionController::new(sink.clone(), params()));

        let first = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.trigger(payload()).await })
        };

        // Wait until the first exchange is parked inside the sink.
        sink.entered.notified().await;
        assert!(controller.busy());

        // Second trigger must be dropped without a second request.
        let second = controller.trigger(payload()).await;
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);

        sink.release.notify_one();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Delivered);
        assert!(!controller.busy());
    }

    #[tokio::test]
    async fn test_retrigger_restarts_feedback_clock() {
        let sink = Arc::new(MockSink::ok());
        let controller = SubmissionController::new(
            sink,
            params().with_feedback_ttl(Duration::from_millis(60)),
        );

        controller.trigger(payload()).await;
        tokio::time::sleep(Duration::from_millis(35)).await;
        controller.trigger(payload()).await;

        // Past the first TTL but not the second: the stale timer must have
        // been cancelled.
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(controller.feedback().is_some());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(controller.feedback().is_none());
    }
}
