//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types after
//! validation.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wizard_application::config::SubmitParams;
use wizard_domain::{ConfigIssue, Question, QuestionCatalog, QuestionId};

/// Error converting a file configuration into domain types.
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("invalid question catalog: {0}")]
    Catalog(#[from] wizard_domain::DomainError),
    #[error("configuration error: {0}")]
    Invalid(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Submission endpoint and feedback settings
    pub submit: FileSubmitConfig,
    /// Question catalog; the built-in feedback catalog applies when empty
    pub questions: Vec<FileQuestionConfig>,
    /// Delivery log settings
    pub log: FileLogConfig,
}

/// `[submit]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSubmitConfig {
    /// Form ingestion endpoint URL
    pub endpoint: Option<String>,
    /// Feedback message lifetime in milliseconds
    pub feedback_ttl_ms: u64,
    /// Thank-you text shown after a delivered submission
    pub feedback_text: Option<String>,
    /// Whether submission failures are shown to the respondent
    pub surface_failures: bool,
}

impl Default for FileSubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            feedback_ttl_ms: 2000,
            feedback_text: None,
            surface_failures: false,
        }
    }
}

/// One `[[questions]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileQuestionConfig {
    pub id: String,
    pub prompt: String,
}

/// `[log]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path of the JSONL delivery log; disabled when unset
    pub delivery_log: Option<PathBuf>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the config unusable; warnings are printed and ignored.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(endpoint) = &self.submit.endpoint
            && endpoint.trim().is_empty()
        {
            issues.push(ConfigIssue::error("submit.endpoint is set but empty"));
        }

        if self.submit.feedback_ttl_ms == 0 {
            issues.push(ConfigIssue::warning(
                "submit.feedback_ttl_ms is 0; the thank-you message will be cleared immediately",
            ));
        }

        for (i, q) in self.questions.iter().enumerate() {
            if q.id.trim().is_empty() {
                issues.push(ConfigIssue::error(format!(
                    "questions[{i}]: id cannot be empty"
                )));
            }
            if q.prompt.trim().is_empty() {
                issues.push(ConfigIssue::warning(format!(
                    "questions[{i}] ('{}'): prompt is empty",
                    q.id
                )));
            }
            if self.questions[..i].iter().any(|other| other.id == q.id) {
                issues.push(ConfigIssue::error(format!(
                    "questions[{i}]: duplicate id '{}'",
                    q.id
                )));
            }
        }

        issues
    }

    /// Build the question catalog, falling back to the built-in feedback
    /// catalog when no questions are configured.
    pub fn to_catalog(&self) -> Result<QuestionCatalog, ConfigValidationError> {
        if self.questions.is_empty() {
            return Ok(QuestionCatalog::default_feedback());
        }
        let questions = self
            .questions
            .iter()
            .map(|q| {
                QuestionId::try_new(q.id.clone())
                    .map(|id| Question::new(id, q.prompt.clone()))
                    .ok_or_else(|| {
                        ConfigValidationError::Invalid("question id cannot be empty".to_string())
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(QuestionCatalog::try_new(questions)?)
    }

    /// Build submission parameters. The endpoint is mandatory here; callers
    /// that never submit for real (dry-run) bypass this.
    pub fn to_submit_params(&self) -> Result<SubmitParams, ConfigValidationError> {
        let endpoint = self
            .submit
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                ConfigValidationError::Invalid(
                    "submit.endpoint is not set; configure it or pass --endpoint".to_string(),
                )
            })?;

        let mut params = SubmitParams::new(endpoint)
            .with_feedback_ttl(Duration::from_millis(self.submit.feedback_ttl_ms))
            .with_surface_failures(self.submit.surface_failures);
        if let Some(text) = &self.submit.feedback_text {
            params = params.with_feedback_text(text.clone());
        }
        Ok(params)
    }
}
