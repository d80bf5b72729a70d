//! Solution catalog metadata.
//!
//! Static description of the six request forms the site offers: per
//! category the French pitch, the call-to-action and the ordered field
//! list (label, input kind, select options), exactly as the public forms
//! present them. The CLI renders this for operators; it is also the
//! reference for which camelCase keys a lead JSON may carry.

use crate::types::solution::SolutionKind;

/// Input widget of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Textarea,
    Select,
}

impl std::fmt::Display for FieldKind {
    /// Widget token as the site's form definitions spell it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Email => write!(f, "email"),
            FieldKind::Tel => write!(f, "tel"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Textarea => write!(f, "textarea"),
            FieldKind::Select => write!(f, "select"),
        }
    }
}

/// One field of a solution request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// camelCase field name, as serialized in a lead JSON
    pub name: &'static str,
    /// French label shown next to the input
    pub label: &'static str,
    pub kind: FieldKind,
    /// Choices for `Select` fields, empty otherwise
    pub options: &'static [&'static str],
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        options: &[],
    }
}

const fn select(
    name: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Select,
        options,
    }
}

static KITS_FIELDS: [FieldSpec; 9] = [
    field("entityName", "Nom de l'entité", FieldKind::Text),
    field("country", "Pays & ville", FieldKind::Text),
    field("projectManager", "Responsable du projet / Fonction", FieldKind::Text),
    field("phone", "Téléphone / WhatsApp", FieldKind::Tel),
    field("email", "E-mail", FieldKind::Email),
    field("quantity", "Nombre de mallettes envisagées", FieldKind::Number),
    field("targetAreas", "Zone(s) d'intervention ciblée(s)", FieldKind::Text),
    field("objective", "Objectif du projet", FieldKind::Textarea),
    field("message", "Message complémentaire", FieldKind::Textarea),
];

static TERMINALS_FIELDS: [FieldSpec; 7] = [
    field("establishmentName", "Nom de l'établissement", FieldKind::Text),
    field("location", "Localisation", FieldKind::Text),
    field("terminalType", "Type de borne souhaitée", FieldKind::Text),
    field("consultationNeeds", "Besoins en téléconsultation", FieldKind::Textarea),
    select("hasStableInternet", "Accès Internet stable ?", &["Oui", "Non", "Incertain"]),
    field("contactPerson", "Interlocuteur principal", FieldKind::Text),
    field("message", "Message libre", FieldKind::Textarea),
];

static VEHICLES_FIELDS: [FieldSpec; 7] = [
    field("structure", "Structure concernée", FieldKind::Text),
    field("vehicleType", "Type de véhicule recherché", FieldKind::Text),
    field("estimatedQuantity", "Quantité estimée", FieldKind::Number),
    field("budget", "Budget indicatif", FieldKind::Text),
    field("financingMethod", "Mode de financement", FieldKind::Text),
    field("projectLocation", "Localisation du projet", FieldKind::Text),
    field("contact", "Contact", FieldKind::Text),
];

static CONTAINERS_FIELDS: [FieldSpec; 7] = [
    field("organization", "Organisation demandeuse", FieldKind::Text),
    field("containerType", "Type de conteneur", FieldKind::Text),
    field("area", "Zone à équiper", FieldKind::Text),
    field("containerCount", "Nombre de conteneurs", FieldKind::Number),
    select(
        "urgency",
        "Urgence du besoin",
        &["Immédiate", "Dans les 3 mois", "Dans les 6 mois", "Projet à long terme"],
    ),
    field("nameAndRole", "Nom et fonction", FieldKind::Text),
    field("contactDetails", "Coordonnées complètes", FieldKind::Textarea),
];

static EXPERTISE_FIELDS: [FieldSpec; 6] = [
    field("medicalStructure", "Structure médicale", FieldKind::Text),
    field("specialties", "Spécialités visées", FieldKind::Text),
    field("volume", "Volume estimé de télé-expertises", FieldKind::Text),
    select("hasPartner", "Partenaire identifié ?", &["Oui", "Non", "En recherche"]),
    field("referent", "Référent", FieldKind::Text),
    field("objectives", "Objectifs attendus", FieldKind::Textarea),
];

static EVACUATIONS_FIELDS: [FieldSpec; 7] = [
    field("entityType", "Type d'entité", FieldKind::Text),
    field("careCountry", "Pays de prise en charge", FieldKind::Text),
    field("evacuationDestination", "Destination d'évacuation", FieldKind::Text),
    field("estimatedCases", "Nombre estimé de cas/an", FieldKind::Number),
    field("pathologyTypes", "Types de pathologies", FieldKind::Text),
    field("contactPerson", "Responsable contact", FieldKind::Text),
    field("additionalInfo", "Informations utiles", FieldKind::Textarea),
];

impl SolutionKind {
    /// Pitch shown on the solution card.
    pub fn description(&self) -> &'static str {
        match self {
            SolutionKind::Kits => {
                "Kits portables avec outils de diagnostic (ECG, tension, otoscope…)."
            }
            SolutionKind::Terminals => "Dispositifs fixes connectés pour les téléconsultations.",
            SolutionKind::Vehicles => "Ambulances et unités mobiles pour zones isolées.",
            SolutionKind::Containers => "Structures médicalisées à installer.",
            SolutionKind::Expertise => "Mise en réseau avec spécialistes.",
            SolutionKind::Evacuations => "Transferts médicaux assistés.",
        }
    }

    /// Call-to-action of the category's form.
    pub fn action(&self) -> &'static str {
        match self {
            SolutionKind::Kits => "Demander une démonstration ou un échange",
            SolutionKind::Terminals => "Planifier un rendez-vous d'étude technique",
            SolutionKind::Vehicles => "Obtenir une fiche technique et un devis",
            SolutionKind::Containers => "Demander un échange sur les modules santé",
            SolutionKind::Expertise => {
                "Organiser une réunion d'intégration de la télé-expertise"
            }
            SolutionKind::Evacuations => "Demander une convention ou un partenariat",
        }
    }

    /// Ordered form fields, exactly as the site presents them.
    pub fn form_fields(&self) -> &'static [FieldSpec] {
        match self {
            SolutionKind::Kits => &KITS_FIELDS,
            SolutionKind::Terminals => &TERMINALS_FIELDS,
            SolutionKind::Vehicles => &VEHICLES_FIELDS,
            SolutionKind::Containers => &CONTAINERS_FIELDS,
            SolutionKind::Expertise => &EXPERTISE_FIELDS,
            SolutionKind::Evacuations => &EVACUATIONS_FIELDS,
        }
    }
}
