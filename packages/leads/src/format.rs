//! Folding category answers into the outgoing message.
//!
//! The submit endpoint has a single free-text `message` field, so every
//! category-specific answer is appended to the visitor's message as a
//! labeled line under a `=== DEMANDE: … ===` header.

use crate::types::form::LeadForm;

/// Build the outgoing message for a lead.
///
/// Starts from the free-text message (empty if absent), then appends the
/// details block: a header naming the solution category, followed by one
/// `Label: value` line per populated field in fixed catalog order. Fields
/// that are absent, empty, or zero are skipped. Without any detail the
/// message passes through unchanged.
pub fn format_message(form: &LeadForm) -> String {
    let mut details: Vec<String> = Vec::new();

    if let Some(title) = filled(&form.solution_title) {
        details.push(format!("=== DEMANDE: {} ===", title.to_uppercase()));
    }

    // Telemedicine kits
    push_text(&mut details, "Pays & ville", &form.country);
    push_count(&mut details, "Nombre de mallettes", form.quantity);
    push_text(&mut details, "Zones d'intervention", &form.target_areas);
    push_text(&mut details, "Objectif", &form.objective);

    // Telemedicine terminals
    push_text(&mut details, "Localisation", &form.location);
    push_text(&mut details, "Type de borne", &form.terminal_type);
    push_text(&mut details, "Besoins téléconsultation", &form.consultation_needs);
    push_text(&mut details, "Internet stable", &form.has_stable_internet);

    // Medicalized vehicles
    push_text(&mut details, "Type de véhicule", &form.vehicle_type);
    push_count(&mut details, "Quantité estimée", form.estimated_quantity);
    push_text(&mut details, "Budget", &form.budget);
    push_text(&mut details, "Financement", &form.financing_method);
    push_text(&mut details, "Localisation projet", &form.project_location);

    // Health containers
    push_text(&mut details, "Type de conteneur", &form.container_type);
    push_text(&mut details, "Zone à équiper", &form.area);
    push_count(&mut details, "Nombre de conteneurs", form.container_count);
    push_text(&mut details, "Urgence", &form.urgency);
    push_text(&mut details, "Nom et fonction", &form.name_and_role);
    push_text(&mut details, "Coordonnées", &form.contact_details);

    // Tele-expertise
    push_text(&mut details, "Spécialités", &form.specialties);
    push_text(&mut details, "Volume estimé", &form.volume);
    push_text(&mut details, "Partenaire identifié", &form.has_partner);
    push_text(&mut details, "Objectifs", &form.objectives);

    // Medical evacuations
    push_text(&mut details, "Type d'entité", &form.entity_type);
    push_text(&mut details, "Pays de prise en charge", &form.care_country);
    push_text(&mut details, "Destination évacuation", &form.evacuation_destination);
    push_count(&mut details, "Cas estimés/an", form.estimated_cases);
    push_text(&mut details, "Types de pathologies", &form.pathology_types);
    push_text(&mut details, "Infos utiles", &form.additional_info);

    let message = form.message.clone().unwrap_or_default();
    if details.is_empty() {
        message
    } else {
        format!("{}\n\n{}", message, details.join("\n"))
    }
}

/// Non-empty string content of an optional field.
pub(crate) fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn push_text(details: &mut Vec<String>, label: &str, value: &Option<String>) {
    if let Some(v) = filled(value) {
        details.push(format!("{}: {}", label, v));
    }
}

// A zero count is dropped like an absent field, matching the site's
// truthiness check on form values.
fn push_count(details: &mut Vec<String>, label: &str, value: Option<u32>) {
    if let Some(n) = value {
        if n > 0 {
            details.push(format!("{}: {}", label, n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::solution::{EvacuationsRequest, SolutionRequest, VehiclesRequest};

    #[test]
    fn test_plain_message_passes_through() {
        let form = LeadForm::new("A", "a@b.c", "Merci de me rappeler.");
        assert_eq!(format_message(&form), "Merci de me rappeler.");
    }

    #[test]
    fn test_header_and_details_follow_the_message() {
        let mut form = LeadForm::new("A", "a@b.c", "hi");
        form.solution_title = Some("Mallettes".to_string());
        form.country = Some("Sénégal".to_string());
        form.quantity = Some(3);

        assert_eq!(
            format_message(&form),
            "hi\n\n=== DEMANDE: MALLETTES ===\nPays & ville: Sénégal\nNombre de mallettes: 3"
        );
    }

    #[test]
    fn test_missing_message_still_gets_details() {
        let mut form = LeadForm::default();
        form.country = Some("Togo".to_string());
        // The block keeps its two leading newlines even with no message
        assert_eq!(format_message(&form), "\n\nPays & ville: Togo");
    }

    #[test]
    fn test_empty_title_adds_no_header() {
        let mut form = LeadForm::new("A", "a@b.c", "hi");
        form.solution_title = Some(String::new());
        form.urgency = Some("Immédiate".to_string());
        assert_eq!(format_message(&form), "hi\n\nUrgence: Immédiate");
    }

    #[test]
    fn test_formatting_is_idempotent_per_input() {
        let form = crate::testing::kit_request_lead();
        assert_eq!(format_message(&form), format_message(&form));
    }

    #[test]
    fn test_fields_come_out_in_catalog_order() {
        let mut form = LeadForm::new("A", "a@b.c", "m").with_solution(
            SolutionRequest::Evacuations(EvacuationsRequest {
                entity_type: Some("ONG".into()),
                care_country: Some("Mali".into()),
                estimated_cases: Some(12),
                additional_info: Some("Convention souhaitée".into()),
                ..Default::default()
            }),
        );
        // Out-of-category stragglers still print, in checklist order
        form.budget = Some("50 000 €".to_string());

        assert_eq!(
            format_message(&form),
            "m\n\n=== DEMANDE: ASSISTANCE AUX ÉVACUATIONS SANITAIRES ===\n\
             Budget: 50 000 €\n\
             Type d'entité: ONG\n\
             Pays de prise en charge: Mali\n\
             Cas estimés/an: 12\n\
             Infos utiles: Convention souhaitée"
        );
    }

    // Known quirk kept on purpose: a zero count disappears from the
    // details, so "0 mallettes" can never be expressed.
    #[test]
    fn test_zero_counts_are_dropped() {
        let mut form = LeadForm::new("A", "a@b.c", "hi");
        form.quantity = Some(0);
        form.container_count = Some(0);
        assert_eq!(format_message(&form), "hi");
    }

    #[test]
    fn test_empty_strings_are_dropped() {
        let mut form = LeadForm::new("A", "a@b.c", "hi");
        form.country = Some(String::new());
        form.urgency = Some(String::new());
        assert_eq!(format_message(&form), "hi");
    }

    // The vehicles form collects a `contact` field that has no line in
    // the details block; it must not leak into the message.
    #[test]
    fn test_vehicle_contact_is_not_formatted() {
        let form = LeadForm::new("A", "a@b.c", "m").with_solution(SolutionRequest::Vehicles(
            VehiclesRequest {
                vehicle_type: Some("Ambulance 4x4".into()),
                contact: Some("M. Diallo, +224 622 00 00 00".into()),
                ..Default::default()
            },
        ));

        let message = format_message(&form);
        assert!(message.contains("Type de véhicule: Ambulance 4x4"));
        assert!(!message.contains("Diallo"));
    }

    #[test]
    fn test_title_uppercases_accents() {
        let mut form = LeadForm::default();
        form.solution_title = Some("Télé-expertise locale et internationale".to_string());
        let message = format_message(&form);
        assert!(message.contains("=== DEMANDE: TÉLÉ-EXPERTISE LOCALE ET INTERNATIONALE ==="));
    }
}
