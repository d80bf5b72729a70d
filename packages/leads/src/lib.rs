//! Lead-generation contact pipeline for the digihealth4africa site.
//!
//! The site collects requests for six solution categories (telemedicine
//! kits, fixed terminals, medicalized vehicles, health containers,
//! tele-expertise, medical evacuations) plus general contact. This crate
//! owns everything between a filled-in form and the remote endpoint:
//!
//! - validate the form (required name / email / message, French messages)
//! - fold category-specific answers into the single free-text message
//! - normalize onto the fixed wire schema
//! - POST to the submit endpoint and report a visitor-facing outcome
//!
//! # Usage
//!
//! ```rust,ignore
//! use leads::{validate, KitsRequest, LeadClient, LeadForm, SolutionRequest};
//!
//! let form = LeadForm::new("Awa Diop", "awa@example.org", "Rappel souhaité")
//!     .with_phone("+221 77 000 00 00")
//!     .with_solution(SolutionRequest::Kits(KitsRequest {
//!         entity_name: Some("Hôpital régional".into()),
//!         country: Some("Sénégal".into()),
//!         quantity: Some(3),
//!         ..Default::default()
//!     }));
//!
//! let report = validate(&form);
//! assert!(report.is_valid());
//!
//! let outcome = LeadClient::new().submit(&form).await;
//! println!("{}", outcome.message);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Lead form, solution categories, pipeline results
//! - [`catalog`] - Per-category form metadata (labels, kinds, options)
//! - [`validate`] - Pre-submission validation
//! - [`format`] - Message folding
//! - [`payload`] - Wire schema normalization
//! - [`client`] - HTTP submission
//! - [`testing`] - Sample leads for tests

pub mod catalog;
pub mod client;
pub mod error;
pub mod format;
pub mod payload;
pub mod testing;
pub mod types;
pub mod validate;

// Re-export core types at crate root
pub use client::{LeadClient, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use error::{SubmitError, SubmitResult, UnknownSolution};
pub use format::format_message;
pub use payload::LeadPayload;
pub use types::{
    form::LeadForm,
    outcome::{SubmitOutcome, CONFIRMATION_MESSAGE, FAILURE_MESSAGE},
    report::ValidationReport,
    solution::{
        ContainersRequest, EvacuationsRequest, ExpertiseRequest, KitsRequest, SolutionKind,
        SolutionRequest, TerminalsRequest, VehiclesRequest,
    },
};
pub use validate::validate;
