//! Submission payload snapshot.

use crate::catalog::QuestionId;
use serde::Serialize;

/// One outbound form field: part name = question id, value = answer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerField {
    pub id: QuestionId,
    pub value: String,
}

/// Immutable snapshot of all answers taken at submission time.
///
/// Contains exactly one field per catalog question, in catalog order; an
/// empty value signals "not answered". The snapshot is detached from the
/// answer sheet, so later edits never leak into an in-flight submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerPayload {
    fields: Vec<AnswerField>,
}

impl AnswerPayload {
    pub fn new(fields: Vec<AnswerField>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnswerField> {
        self.fields.iter()
    }

    pub fn value_of(&self, id: &QuestionId) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| &f.id == id)
            .map(|f| f.value.as_str())
    }

    /// Number of fields carrying a non-empty answer.
    pub fn answered(&self) -> usize {
        self.fields.iter().filter(|f| !f.value.is_empty()).count()
    }
}
