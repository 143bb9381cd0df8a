//! Question value object

use serde::{Deserialize, Serialize};

/// Stable identifier of a question (Value Object)
///
/// Question ids double as the part names of the outbound multipart form, so
/// they must be unique within a catalog and stable across the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a new question id
    ///
    /// # Panics
    /// Panics if the id is empty or only whitespace
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.trim().is_empty(), "Question id cannot be empty");
        Self(id)
    }

    /// Try to create a new id, returning None if invalid
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        QuestionId::new(s)
    }
}

/// A single survey question (Value Object)
///
/// Immutable once constructed. The catalog owns ordering; a question knows
/// nothing about its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
}

impl Question {
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}
