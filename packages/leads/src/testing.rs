//! Sample leads for tests.
//!
//! Used by the unit and integration suites, and handy for applications
//! exercising the pipeline without a real visitor.

use crate::types::form::LeadForm;
use crate::types::solution::{KitsRequest, SolutionRequest};

/// Minimal valid lead with no solution category (general contact).
pub fn general_contact_lead() -> LeadForm {
    LeadForm::new(
        "Awa Diop",
        "awa.diop@example.org",
        "Merci de me rappeler au sujet de vos solutions.",
    )
}

/// Fully-populated telemedicine-kits request.
pub fn kit_request_lead() -> LeadForm {
    LeadForm::new(
        "Dr Moussa Ndiaye",
        "m.ndiaye@example.sn",
        "Projet pilote régional.",
    )
    .with_phone("+221 77 123 45 67")
    .with_solution(SolutionRequest::Kits(KitsRequest {
        entity_name: Some("Hôpital Régional de Saint-Louis".into()),
        country: Some("Sénégal, Saint-Louis".into()),
        project_manager: Some("Dr Moussa Ndiaye, médecin-chef".into()),
        quantity: Some(3),
        target_areas: Some("Podor, Dagana".into()),
        objective: Some("Couvrir les postes de santé isolés du fleuve".into()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn test_samples_are_valid() {
        assert!(validate(&general_contact_lead()).is_valid());
        assert!(validate(&kit_request_lead()).is_valid());
    }

    #[test]
    fn test_kit_sample_names_its_category() {
        let form = kit_request_lead();
        assert_eq!(
            form.solution_title.as_deref(),
            Some("Mallettes de télémédecine")
        );
    }
}
