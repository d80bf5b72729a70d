//! Typed solution-request categories.
//!
//! The site offers six solution categories, each with its own request
//! form. A [`SolutionRequest`] carries exactly the fields of one
//! category; [`crate::types::form::LeadForm::with_solution`] lowers it
//! onto the flat form the rest of the pipeline works with, so the
//! formatter stays a single category-agnostic function.

use serde::{Deserialize, Serialize};

use crate::error::UnknownSolution;
use crate::types::form::LeadForm;

/// The solution categories of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionKind {
    Kits,
    Terminals,
    Vehicles,
    Containers,
    Expertise,
    Evacuations,
}

impl SolutionKind {
    /// All categories, in catalog order.
    pub const ALL: [SolutionKind; 6] = [
        SolutionKind::Kits,
        SolutionKind::Terminals,
        SolutionKind::Vehicles,
        SolutionKind::Containers,
        SolutionKind::Expertise,
        SolutionKind::Evacuations,
    ];

    /// French catalog title, used as the `solutionTitle` of a lead.
    pub fn title(&self) -> &'static str {
        match self {
            SolutionKind::Kits => "Mallettes de télémédecine",
            SolutionKind::Terminals => "Bornes de télémédecine",
            SolutionKind::Vehicles => "Véhicules médicalisés",
            SolutionKind::Containers => "Conteneurs santé",
            SolutionKind::Expertise => "Télé-expertise locale et internationale",
            SolutionKind::Evacuations => "Assistance aux évacuations sanitaires",
        }
    }
}

impl std::fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionKind::Kits => write!(f, "kits"),
            SolutionKind::Terminals => write!(f, "terminals"),
            SolutionKind::Vehicles => write!(f, "vehicles"),
            SolutionKind::Containers => write!(f, "containers"),
            SolutionKind::Expertise => write!(f, "expertise"),
            SolutionKind::Evacuations => write!(f, "evacuations"),
        }
    }
}

impl std::str::FromStr for SolutionKind {
    type Err = UnknownSolution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kits" => Ok(SolutionKind::Kits),
            "terminals" => Ok(SolutionKind::Terminals),
            "vehicles" => Ok(SolutionKind::Vehicles),
            "containers" => Ok(SolutionKind::Containers),
            "expertise" => Ok(SolutionKind::Expertise),
            "evacuations" => Ok(SolutionKind::Evacuations),
            _ => Err(UnknownSolution(s.to_string())),
        }
    }
}

/// Telemedicine kits request (portable diagnostic cases).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KitsRequest {
    pub entity_name: Option<String>,
    pub country: Option<String>,
    pub project_manager: Option<String>,
    pub quantity: Option<u32>,
    pub target_areas: Option<String>,
    pub objective: Option<String>,
}

/// Fixed telemedicine terminals request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminalsRequest {
    pub establishment_name: Option<String>,
    pub location: Option<String>,
    pub terminal_type: Option<String>,
    pub consultation_needs: Option<String>,
    /// "Oui" / "Non" / "Incertain"
    pub has_stable_internet: Option<String>,
    pub contact_person: Option<String>,
}

/// Medicalized vehicles request (ambulances, mobile units).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehiclesRequest {
    pub structure: Option<String>,
    pub vehicle_type: Option<String>,
    pub estimated_quantity: Option<u32>,
    pub budget: Option<String>,
    pub financing_method: Option<String>,
    pub project_location: Option<String>,
    pub contact: Option<String>,
}

/// Health containers request (installable medical modules).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainersRequest {
    pub container_type: Option<String>,
    pub area: Option<String>,
    pub container_count: Option<u32>,
    /// "Immédiate" / "Dans les 3 mois" / "Dans les 6 mois" / "Projet à long terme"
    pub urgency: Option<String>,
    pub name_and_role: Option<String>,
    pub contact_details: Option<String>,
}

/// Tele-expertise network request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpertiseRequest {
    pub medical_structure: Option<String>,
    pub specialties: Option<String>,
    pub volume: Option<String>,
    /// "Oui" / "Non" / "En recherche"
    pub has_partner: Option<String>,
    pub referent: Option<String>,
    pub objectives: Option<String>,
}

/// Medical evacuation assistance request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvacuationsRequest {
    pub entity_type: Option<String>,
    pub care_country: Option<String>,
    pub evacuation_destination: Option<String>,
    pub estimated_cases: Option<u32>,
    pub pathology_types: Option<String>,
    pub contact_person: Option<String>,
    pub additional_info: Option<String>,
}

/// One solution request, with exactly the fields of its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolutionRequest {
    Kits(KitsRequest),
    Terminals(TerminalsRequest),
    Vehicles(VehiclesRequest),
    Containers(ContainersRequest),
    Expertise(ExpertiseRequest),
    Evacuations(EvacuationsRequest),
}

impl SolutionRequest {
    /// Category of this request.
    pub fn kind(&self) -> SolutionKind {
        match self {
            SolutionRequest::Kits(_) => SolutionKind::Kits,
            SolutionRequest::Terminals(_) => SolutionKind::Terminals,
            SolutionRequest::Vehicles(_) => SolutionKind::Vehicles,
            SolutionRequest::Containers(_) => SolutionKind::Containers,
            SolutionRequest::Expertise(_) => SolutionKind::Expertise,
            SolutionRequest::Evacuations(_) => SolutionKind::Evacuations,
        }
    }

    /// French catalog title of this request's category.
    pub fn title(&self) -> &'static str {
        self.kind().title()
    }

    /// Copy this request's fields onto the flat form and stamp the
    /// catalog title.
    pub(crate) fn apply(self, form: &mut LeadForm) {
        form.solution_title = Some(self.title().to_string());

        match self {
            SolutionRequest::Kits(r) => {
                form.entity_name = r.entity_name;
                form.country = r.country;
                form.project_manager = r.project_manager;
                form.quantity = r.quantity;
                form.target_areas = r.target_areas;
                form.objective = r.objective;
            }
            SolutionRequest::Terminals(r) => {
                form.establishment_name = r.establishment_name;
                form.location = r.location;
                form.terminal_type = r.terminal_type;
                form.consultation_needs = r.consultation_needs;
                form.has_stable_internet = r.has_stable_internet;
                form.contact_person = r.contact_person;
            }
            SolutionRequest::Vehicles(r) => {
                form.structure = r.structure;
                form.vehicle_type = r.vehicle_type;
                form.estimated_quantity = r.estimated_quantity;
                form.budget = r.budget;
                form.financing_method = r.financing_method;
                form.project_location = r.project_location;
                form.contact = r.contact;
            }
            SolutionRequest::Containers(r) => {
                form.container_type = r.container_type;
                form.area = r.area;
                form.container_count = r.container_count;
                form.urgency = r.urgency;
                form.name_and_role = r.name_and_role;
                form.contact_details = r.contact_details;
            }
            SolutionRequest::Expertise(r) => {
                form.medical_structure = r.medical_structure;
                form.specialties = r.specialties;
                form.volume = r.volume;
                form.has_partner = r.has_partner;
                form.referent = r.referent;
                form.objectives = r.objectives;
            }
            SolutionRequest::Evacuations(r) => {
                form.entity_type = r.entity_type;
                form.care_country = r.care_country;
                form.evacuation_destination = r.evacuation_destination;
                form.estimated_cases = r.estimated_cases;
                form.pathology_types = r.pathology_types;
                form.contact_person = r.contact_person;
                form.additional_info = r.additional_info;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_token_round_trip() {
        for kind in SolutionKind::ALL {
            let token = kind.to_string();
            assert_eq!(SolutionKind::from_str(&token).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_token() {
        let err = SolutionKind::from_str("drones").unwrap_err();
        assert_eq!(err.to_string(), "unknown solution category: drones");
    }

    #[test]
    fn test_apply_stamps_title_and_fields() {
        let form = LeadForm::new("A", "a@b.c", "m").with_solution(SolutionRequest::Terminals(
            TerminalsRequest {
                establishment_name: Some("CHU de Fann".into()),
                has_stable_internet: Some("Incertain".into()),
                ..Default::default()
            },
        ));

        assert_eq!(form.solution_title.as_deref(), Some("Bornes de télémédecine"));
        assert_eq!(form.establishment_name.as_deref(), Some("CHU de Fann"));
        assert_eq!(form.has_stable_internet.as_deref(), Some("Incertain"));
        assert!(form.country.is_none());
    }

    #[test]
    fn test_request_serde_is_tagged() {
        let request = SolutionRequest::Containers(ContainersRequest {
            container_count: Some(2),
            urgency: Some("Immédiate".into()),
            ..Default::default()
        });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["kind"], "containers");
        assert_eq!(value["containerCount"], 2);

        let back: SolutionRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back, request);
    }
}
