//! HTTP form sink: multipart POST to the ingestion endpoint.

use async_trait::async_trait;
use reqwest::multipart::Form;
use std::time::Duration;
use tracing::debug;
use wizard_application::ports::form_sink::{FormSink, SinkError};
use wizard_domain::AnswerPayload;

/// Request timeout for a single submission.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Delivers an answer snapshot as one `multipart/form-data` POST.
///
/// Each payload field becomes one form part, part name = question id, part
/// body = answer text (possibly empty). Success is judged from the status
/// line alone; the response body is never read.
pub struct HttpFormSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(SUBMIT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Use a caller-provided client (custom timeouts, proxies, test setups).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormSink for HttpFormSink {
    async fn deliver(&self, payload: &AnswerPayload) -> Result<(), SinkError> {
        let mut form = Form::new();
        for field in payload.iter() {
            form = form.text(field.id.to_string(), field.value.clone());
        }

        debug!(
            "POST {} with {} parts ({} answered)",
            self.endpoint,
            payload.len(),
            payload.answered()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("User-Agent", "SurveyWizard/0.4")
            .multipart(form)
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
