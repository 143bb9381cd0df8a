//! Form sink port
//!
//! Defines the interface for delivering an answer snapshot to the remote
//! form-ingestion endpoint. The HTTP adapter lives in the infrastructure
//! layer; tests use in-memory mocks.

use async_trait::async_trait;
use thiserror::Error;
use wizard_domain::AnswerPayload;

/// Errors that can occur while delivering a submission.
///
/// The two variants are handled identically by the controller (log, keep
/// answers, clear busy); they are distinguished so the operator channel can
/// tell a dead network from a rejecting endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The request failed before a status line was received (network
    /// unreachable, connection refused, TLS failure, ...).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// A response arrived, but its status was outside the success range.
    #[error("Endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
}

/// Outbound delivery of one answer snapshot.
///
/// Implementations issue exactly one request per call and report success
/// purely from the transport-level status; no response body is consulted.
#[async_trait]
pub trait FormSink: Send + Sync {
    async fn deliver(&self, payload: &AnswerPayload) -> Result<(), SinkError>;
}
