//! The lead form record.
//!
//! One flat record covers general contact plus all six solution request
//! forms; each form populates its own subset of the optional fields. The
//! formatter and normalizer silently skip absent fields, so mixed or
//! partial subsets are harmless.

use serde::{Deserialize, Serialize};

use crate::types::solution::SolutionRequest;

/// One lead-generation request, as collected from a visitor.
///
/// `name`, `email` and `message` are logically required but kept optional
/// here so an incomplete form is representable; [`crate::validate`]
/// decides acceptability. Serialized with camelCase keys, matching the
/// site's form payloads.
///
/// Numeric fields are counts (`quantity`, `containerCount`, …) and
/// deserialize from JSON numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadForm {
    pub name: Option<String>,
    /// Role of the requester ("Directeur", "Médecin-chef", …)
    pub function: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    /// Requested appointment slot, `YYYY-MM-DD HH:MM:SS`
    pub appointment: Option<String>,
    /// Free-text message; category details get appended to it on the wire
    pub message: Option<String>,

    // Telemedicine kits
    pub entity_name: Option<String>,
    pub country: Option<String>,
    pub project_manager: Option<String>,
    pub quantity: Option<u32>,
    pub target_areas: Option<String>,
    pub objective: Option<String>,

    // Telemedicine terminals
    pub establishment_name: Option<String>,
    pub location: Option<String>,
    pub terminal_type: Option<String>,
    pub consultation_needs: Option<String>,
    pub has_stable_internet: Option<String>,
    pub contact_person: Option<String>,

    // Medicalized vehicles
    pub structure: Option<String>,
    pub vehicle_type: Option<String>,
    pub estimated_quantity: Option<u32>,
    pub budget: Option<String>,
    pub financing_method: Option<String>,
    pub project_location: Option<String>,
    /// Collected by the vehicles form but never forwarded; kept so those
    /// submissions deserialize without loss
    pub contact: Option<String>,

    // Health containers
    pub container_type: Option<String>,
    pub area: Option<String>,
    pub container_count: Option<u32>,
    pub urgency: Option<String>,
    pub name_and_role: Option<String>,
    pub contact_details: Option<String>,

    // Tele-expertise
    pub medical_structure: Option<String>,
    pub specialties: Option<String>,
    pub volume: Option<String>,
    pub has_partner: Option<String>,
    pub referent: Option<String>,
    pub objectives: Option<String>,

    // Medical evacuations
    pub entity_type: Option<String>,
    pub care_country: Option<String>,
    pub evacuation_destination: Option<String>,
    pub estimated_cases: Option<u32>,
    pub pathology_types: Option<String>,
    pub additional_info: Option<String>,

    /// Catalog title of the concerned solution; absent for general contact
    pub solution_title: Option<String>,
}

impl LeadForm {
    /// Create a lead with the three required fields set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Set the requester's role.
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the organization name.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Set the requested appointment slot.
    pub fn with_appointment(mut self, appointment: impl Into<String>) -> Self {
        self.appointment = Some(appointment.into());
        self
    }

    /// Fill the category-specific fields from a typed request and stamp
    /// the matching catalog title.
    pub fn with_solution(mut self, request: SolutionRequest) -> Self {
        request.apply(&mut self);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::solution::{KitsRequest, SolutionRequest};

    #[test]
    fn test_new_sets_required_fields() {
        let form = LeadForm::new("Awa Diop", "awa@example.org", "Bonjour");
        assert_eq!(form.name.as_deref(), Some("Awa Diop"));
        assert_eq!(form.email.as_deref(), Some("awa@example.org"));
        assert_eq!(form.message.as_deref(), Some("Bonjour"));
        assert!(form.solution_title.is_none());
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let form = LeadForm::new("A", "a@b.c", "m").with_solution(SolutionRequest::Kits(
            KitsRequest {
                entity_name: Some("Clinique du Plateau".into()),
                quantity: Some(2),
                ..Default::default()
            },
        ));

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["entityName"], "Clinique du Plateau");
        assert_eq!(value["quantity"], 2);
        assert_eq!(value["solutionTitle"], "Mallettes de télémédecine");
    }

    #[test]
    fn test_partial_json_deserializes() {
        let form: LeadForm = serde_json::from_str(
            r#"{"name":"A","email":"a@b.c","message":"m","containerCount":4}"#,
        )
        .unwrap();
        assert_eq!(form.container_count, Some(4));
        assert!(form.country.is_none());
    }
}
