//! Submission outcomes.

use serde::Serialize;
use serde_json::Value;

/// Confirmation shown to the visitor when the endpoint accepts a lead.
pub const CONFIRMATION_MESSAGE: &str =
    "Votre demande a été envoyée avec succès. Nous vous contacterons prochainement.";

/// Generic failure message; the specific cause is only logged.
pub const FAILURE_MESSAGE: &str =
    "Une erreur est survenue lors de l'envoi. Veuillez réessayer ou nous contacter directement.";

/// Result of a submission attempt, as reported to the visitor.
///
/// `data` is whatever JSON the endpoint answered with, kept opaque; it is
/// present only when `success` is true.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
    pub data: Option<Value>,
}

impl SubmitOutcome {
    /// Outcome for an accepted lead.
    pub fn accepted(data: Value) -> Self {
        Self {
            success: true,
            message: CONFIRMATION_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    /// Outcome for a failed attempt. The cause stays out of the message
    /// on purpose; operators get it from the logs.
    pub fn rejected() -> Self {
        Self {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
            data: None,
        }
    }
}
