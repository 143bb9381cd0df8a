//! Configuration validation issues.
//!
//! Infrastructure config loading reports problems as a list of
//! [`ConfigIssue`]s instead of failing on the first one, so the binary can
//! print everything that is wrong (and keep running on warnings).

/// How serious a configuration issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Suspicious but usable; the wizard starts anyway.
    Warning,
    /// Fatal; the wizard refuses to start.
    Error,
}

/// A single detected configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Check whether any issue in the list is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}", tag, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let issues = vec![ConfigIssue::warning("odd"), ConfigIssue::warning("odder")];
        assert!(!ConfigIssue::has_errors(&issues));

        let issues = vec![ConfigIssue::warning("odd"), ConfigIssue::error("broken")];
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigIssue::error("no questions").to_string(),
            "error: no questions"
        );
    }
}
