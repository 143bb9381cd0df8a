//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Catalog must contain at least one question")]
    EmptyCatalog,

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::UnknownQuestion("mood".to_string());
        assert_eq!(error.to_string(), "Unknown question id: mood");

        let error = DomainError::DuplicateQuestion("say".to_string());
        assert_eq!(error.to_string(), "Duplicate question id: say");
    }
}
