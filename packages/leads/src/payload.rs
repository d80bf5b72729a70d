//! Normalization onto the wire schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::{filled, format_message};
use crate::types::form::LeadForm;

/// The fixed schema accepted by the submit endpoint.
///
/// Eight plain-string fields; absent form values become empty strings,
/// never nulls. Keys serialize verbatim (`solution_type` stays
/// snake_case on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub name: String,
    pub function: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub appointment: String,
    pub message: String,
    pub solution_type: String,
}

impl LeadPayload {
    /// Normalize a form for submission, stamping the current UTC time
    /// when no appointment was requested.
    pub fn from_form(form: &LeadForm) -> Self {
        Self::from_form_at(form, Utc::now())
    }

    /// Like [`LeadPayload::from_form`] with an explicit clock, for
    /// deterministic output.
    ///
    /// `function` and `organization` fall back through the role-like and
    /// structure-like answers of the category forms, first non-empty
    /// wins. `solution_type` defaults to "Contact général" when the lead
    /// names no catalog entry.
    pub fn from_form_at(form: &LeadForm, now: DateTime<Utc>) -> Self {
        Self {
            name: text_or_empty(&form.name),
            function: first_filled(&[
                &form.function,
                &form.project_manager,
                &form.contact_person,
                &form.referent,
            ]),
            email: text_or_empty(&form.email),
            phone: text_or_empty(&form.phone),
            organization: first_filled(&[
                &form.organization,
                &form.entity_name,
                &form.establishment_name,
                &form.structure,
                &form.medical_structure,
            ]),
            appointment: match filled(&form.appointment) {
                Some(when) => when.to_string(),
                None => now.format("%Y-%m-%d %H:%M:%S").to_string(),
            },
            message: format_message(form),
            solution_type: filled(&form.solution_title)
                .unwrap_or("Contact général")
                .to_string(),
        }
    }
}

fn text_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// First candidate with non-empty content, else "".
fn first_filled(candidates: &[&Option<String>]) -> String {
    candidates
        .iter()
        .filter_map(|c| filled(c))
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_form() -> LeadForm {
        LeadForm::new("A", "a@b.c", "m")
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_required_fields_pass_through() {
        let payload = LeadPayload::from_form_at(&base_form(), fixed_now());
        assert_eq!(payload.name, "A");
        assert_eq!(payload.email, "a@b.c");
        assert_eq!(payload.message, "m");
    }

    #[test]
    fn test_absent_fields_become_empty_strings() {
        let payload = LeadPayload::from_form_at(&base_form(), fixed_now());
        assert_eq!(payload.function, "");
        assert_eq!(payload.phone, "");
        assert_eq!(payload.organization, "");
    }

    #[test]
    fn test_function_falls_back_to_project_manager() {
        let mut form = base_form();
        form.project_manager = Some("Dr. X".to_string());
        let payload = LeadPayload::from_form_at(&form, fixed_now());
        assert_eq!(payload.function, "Dr. X");
    }

    #[test]
    fn test_function_prefers_the_explicit_answer() {
        let mut form = base_form().with_function("Directrice");
        form.project_manager = Some("Dr. X".to_string());
        form.referent = Some("Dr. Y".to_string());
        let payload = LeadPayload::from_form_at(&form, fixed_now());
        assert_eq!(payload.function, "Directrice");
    }

    #[test]
    fn test_empty_function_is_skipped_in_the_chain() {
        let mut form = base_form().with_function("");
        form.contact_person = Some("Mme Sow".to_string());
        let payload = LeadPayload::from_form_at(&form, fixed_now());
        assert_eq!(payload.function, "Mme Sow");
    }

    #[test]
    fn test_organization_chain_order() {
        let mut form = base_form();
        form.medical_structure = Some("Clinique Pasteur".to_string());
        form.structure = Some("CHU".to_string());
        let payload = LeadPayload::from_form_at(&form, fixed_now());
        // `structure` sits before `medicalStructure` in the chain
        assert_eq!(payload.organization, "CHU");
    }

    #[test]
    fn test_requested_appointment_is_kept() {
        let form = base_form().with_appointment("2025-04-01 10:00:00");
        let payload = LeadPayload::from_form_at(&form, fixed_now());
        assert_eq!(payload.appointment, "2025-04-01 10:00:00");
    }

    #[test]
    fn test_missing_appointment_gets_the_clock() {
        let payload = LeadPayload::from_form_at(&base_form(), fixed_now());
        assert_eq!(payload.appointment, "2025-03-14 09:26:53");
    }

    #[test]
    fn test_empty_appointment_gets_the_clock() {
        let form = base_form().with_appointment("");
        let payload = LeadPayload::from_form_at(&form, fixed_now());
        assert_eq!(payload.appointment, "2025-03-14 09:26:53");
    }

    #[test]
    fn test_live_clock_has_wire_shape() {
        let payload = LeadPayload::from_form(&base_form());
        assert!(
            chrono::NaiveDateTime::parse_from_str(&payload.appointment, "%Y-%m-%d %H:%M:%S")
                .is_ok(),
            "unexpected appointment shape: {}",
            payload.appointment
        );
    }

    #[test]
    fn test_solution_type_defaults_to_general_contact() {
        let payload = LeadPayload::from_form_at(&base_form(), fixed_now());
        assert_eq!(payload.solution_type, "Contact général");

        let mut form = base_form();
        form.solution_title = Some(String::new());
        let payload = LeadPayload::from_form_at(&form, fixed_now());
        assert_eq!(payload.solution_type, "Contact général");
    }

    #[test]
    fn test_message_carries_the_details_block() {
        let form = crate::testing::kit_request_lead();
        let payload = LeadPayload::from_form_at(&form, fixed_now());
        assert!(payload.message.starts_with("Projet pilote régional."));
        assert!(payload
            .message
            .contains("=== DEMANDE: MALLETTES DE TÉLÉMÉDECINE ==="));
        assert!(payload.message.contains("Nombre de mallettes: 3"));
    }

    #[test]
    fn test_wire_keys_are_exact() {
        let value =
            serde_json::to_value(LeadPayload::from_form_at(&base_form(), fixed_now())).unwrap();
        let map = value.as_object().unwrap();
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "appointment",
                "email",
                "function",
                "message",
                "name",
                "organization",
                "phone",
                "solution_type"
            ]
        );
    }
}
