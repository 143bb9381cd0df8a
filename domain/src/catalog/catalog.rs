//! Fixed ordered question catalog.

use super::question::{Question, QuestionId};
use crate::core::error::DomainError;

/// Ordered, immutable list of questions.
///
/// The catalog is defined at process start and never mutated afterwards.
/// Its order defines the traversal order of the wizard; ids are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Create a catalog from an ordered list of questions.
    ///
    /// # Panics
    /// Panics if the list is empty or contains duplicate ids. Both are
    /// programmer errors, not runtime conditions.
    pub fn new(questions: Vec<Question>) -> Self {
        match Self::try_new(questions) {
            Ok(catalog) => catalog,
            Err(e) => panic!("invalid question catalog: {e}"),
        }
    }

    /// Fallible constructor for catalogs built from configuration.
    pub fn try_new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        for (i, q) in questions.iter().enumerate() {
            if questions[..i].iter().any(|other| other.id() == q.id()) {
                return Err(DomainError::DuplicateQuestion(q.id().to_string()));
            }
        }
        Ok(Self { questions })
    }

    /// The built-in app-feedback catalog used when no questions are
    /// configured.
    pub fn default_feedback() -> Self {
        Self::new(vec![
            Question::new("say", "What would you say about the app?"),
            Question::new("think", "What do you think about the app overall?"),
            Question::new("feel", "How does using the app make you feel?"),
            Question::new("improve", "Your suggestion to improve the app?"),
            Question::new("occupation", "Your occupation"),
        ])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; a catalog holds at least one question by construction.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.questions.iter().map(|q| q.id())
    }

    /// Position of a question id in traversal order.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.position(id).is_some()
    }
}

impl std::ops::Index<usize> for QuestionCatalog {
    type Output = Question;

    /// Indexing outside `[0, len)` panics; the cursor keeps its index in
    /// range by construction.
    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_questions() -> Vec<Question> {
        vec![
            Question::new("say", "Say something"),
            Question::new("think", "Think something"),
        ]
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let catalog = QuestionCatalog::new(two_questions());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id().as_str(), "say");
        assert_eq!(catalog[1].id().as_str(), "think");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            QuestionCatalog::try_new(vec![]),
            Err(DomainError::EmptyCatalog)
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let questions = vec![
            Question::new("say", "Say something"),
            Question::new("say", "Say it again"),
        ];
        assert_eq!(
            QuestionCatalog::try_new(questions),
            Err(DomainError::DuplicateQuestion("say".to_string()))
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = QuestionCatalog::new(two_questions());
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_position() {
        let catalog = QuestionCatalog::new(two_questions());
        assert_eq!(catalog.position(&"think".into()), Some(1));
        assert_eq!(catalog.position(&"feel".into()), None);
    }

    #[test]
    fn test_default_feedback_catalog() {
        let catalog = QuestionCatalog::default_feedback();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.contains(&"occupation".into()));
    }
}
