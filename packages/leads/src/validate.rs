//! Pre-submission validation of a lead form.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::form::LeadForm;
use crate::types::report::ValidationReport;

lazy_static! {
    // local-part@domain.tld shape, deliberately loose
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Check a lead for the three required fields.
///
/// Every rule runs; failures accumulate in a fixed order (name, email,
/// message). Presence is judged on the trimmed value, but the email
/// pattern runs on the raw string, so surrounding whitespace makes an
/// email invalid rather than absent.
pub fn validate(form: &LeadForm) -> ValidationReport {
    let mut errors = Vec::new();

    if is_blank(&form.name) {
        errors.push("Le nom est requis".to_string());
    }

    if is_blank(&form.email) {
        errors.push("L'email est requis".to_string());
    } else if let Some(email) = form.email.as_deref() {
        if !EMAIL_REGEX.is_match(email) {
            errors.push("L'email n'est pas valide".to_string());
        }
    }

    if is_blank(&form.message) {
        errors.push("Le message est requis".to_string());
    }

    ValidationReport { errors }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
