//! The answer store: question id → current answer text.

use super::payload::{AnswerField, AnswerPayload};
use crate::catalog::{QuestionCatalog, QuestionId};
use crate::core::error::DomainError;
use std::collections::HashMap;
use std::sync::Arc;

/// Mutable store of answer text keyed by question id.
///
/// Invariant: the domain of the store always equals the catalog's id set.
/// Every question has an entry from construction on (default empty string),
/// and [`set_value`](AnswerSheet::set_value) only overwrites existing
/// entries. No validation happens here: empty strings are permitted
/// transiently and in the final payload.
#[derive(Debug, Clone)]
pub struct AnswerSheet {
    catalog: Arc<QuestionCatalog>,
    values: HashMap<QuestionId, String>,
}

impl AnswerSheet {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        let values = catalog
            .ids()
            .map(|id| (id.clone(), String::new()))
            .collect();
        Self { catalog, values }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Overwrite the answer for a question.
    ///
    /// Rejects ids outside the catalog; accepting them would break the
    /// domain invariant and smuggle unexpected fields into the payload.
    pub fn set_value(
        &mut self,
        id: &QuestionId,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        match self.values.get_mut(id) {
            Some(value) => {
                *value = text.into();
                Ok(())
            }
            None => Err(DomainError::UnknownQuestion(id.to_string())),
        }
    }

    /// Current answer text, or the empty string for ids not in the catalog.
    pub fn value(&self, id: &QuestionId) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    /// Number of questions with a non-empty answer.
    pub fn answered_count(&self) -> usize {
        self.values.values().filter(|v| !v.is_empty()).count()
    }

    /// Set every answer back to the empty string.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    /// Snapshot all current values in catalog order.
    ///
    /// The payload contains every question id, answered or not.
    pub fn to_payload(&self) -> AnswerPayload {
        let fields = self
            .catalog
            .iter()
            .map(|q| AnswerField {
                id: q.id().clone(),
                value: self.value(q.id()).to_string(),
            })
            .collect();
        AnswerPayload::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Question;

    fn sheet() -> AnswerSheet {
        let catalog = Arc::new(QuestionCatalog::new(vec![
            Question::new("say", "Say something"),
            Question::new("think", "Think something"),
            Question::new("feel", "Feel something"),
        ]));
        AnswerSheet::new(catalog)
    }

    #[test]
    fn test_every_question_starts_empty() {
        let sheet = sheet();
        assert_eq!(sheet.value(&"say".into()), "");
        assert_eq!(sheet.value(&"think".into()), "");
        assert_eq!(sheet.value(&"feel".into()), "");
        assert_eq!(sheet.answered_count(), 0);
    }

    #[test]
    fn test_set_value_overwrites() {
        let mut sheet = sheet();
        sheet.set_value(&"say".into(), "first").unwrap();
        sheet.set_value(&"say".into(), "second").unwrap();
        assert_eq!(sheet.value(&"say".into()), "second");
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut sheet = sheet();
        let err = sheet.set_value(&"mood".into(), "grumpy").unwrap_err();
        assert_eq!(err, DomainError::UnknownQuestion("mood".to_string()));
    }

    #[test]
    fn test_payload_is_total_over_catalog() {
        // Property: for any sequence of set_value calls, the payload has
        // exactly the catalog's ids, each mapped to its latest value.
        let mut sheet = sheet();
        sheet.set_value(&"think".into(), "a lot").unwrap();
        sheet.set_value(&"say".into(), "ok").unwrap();
        sheet.set_value(&"think".into(), "even more").unwrap();

        let payload = sheet.to_payload();
        assert_eq!(payload.len(), 3);
        assert_eq!(payload.value_of(&"say".into()), Some("ok"));
        assert_eq!(payload.value_of(&"think".into()), Some("even more"));
        assert_eq!(payload.value_of(&"feel".into()), Some(""));
    }

    #[test]
    fn test_payload_follows_catalog_order() {
        let sheet = sheet();
        let ids: Vec<String> = sheet
            .to_payload()
            .iter()
            .map(|f| f.id.to_string())
            .collect();
        assert_eq!(ids, vec!["say", "think", "feel"]);
    }

    #[test]
    fn test_reset_clears_all_values() {
        let mut sheet = sheet();
        sheet.set_value(&"say".into(), "ok").unwrap();
        sheet.set_value(&"feel".into(), "great").unwrap();
        sheet.reset();
        assert_eq!(sheet.answered_count(), 0);
        assert_eq!(sheet.to_payload().answered(), 0);
    }

    #[test]
    fn test_payload_detached_from_sheet() {
        let mut sheet = sheet();
        sheet.set_value(&"say".into(), "ok").unwrap();
        let payload = sheet.to_payload();
        sheet.set_value(&"say".into(), "changed").unwrap();
        assert_eq!(payload.value_of(&"say".into()), Some("ok"));
    }
}
