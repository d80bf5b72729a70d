//! Validation results.

use serde::Serialize;

/// Outcome of validating a lead form.
///
/// Errors are user-facing French strings, in a fixed order (name, email,
/// message) so the caller can show every problem at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// A lead is submittable iff no rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl std::fmt::Display for ValidationReport {
    /// Errors joined with ", ", the way the form surfaces them.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.errors.join(", "))
    }
}
