//! HTTP submission to the lead endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{SubmitError, SubmitResult};
use crate::payload::LeadPayload;
use crate::types::form::LeadForm;
use crate::types::outcome::SubmitOutcome;

/// Production submit endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://digihealth4africa.fr/api/submit.php";

/// Environment variable overriding the endpoint in [`LeadClient::from_env`].
pub const ENDPOINT_ENV: &str = "DIGIHEALTH_SUBMIT_URL";

/// Client for the lead-submission endpoint.
///
/// One POST per lead, no retry, no timeout: a failed submission is
/// retried, if at all, by the visitor re-submitting. Callers that want a
/// timeout or a proxy inject their own [`reqwest::Client`] via
/// [`LeadClient::with_client`].
///
/// # Example
///
/// ```rust,ignore
/// use leads::{validate, LeadClient, LeadForm};
///
/// let form = LeadForm::new("Awa Diop", "awa@example.org", "Rappel souhaité");
/// assert!(validate(&form).is_valid());
///
/// let outcome = LeadClient::new().submit(&form).await;
/// println!("{}", outcome.message);
/// ```
pub struct LeadClient {
    client: Client,
    endpoint: String,
}

impl LeadClient {
    /// Create a client pointed at the production endpoint.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Create from the environment, honoring `DIGIHEALTH_SUBMIT_URL`
    /// when set and non-empty.
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV) {
            Ok(url) if !url.is_empty() => Self::new().with_endpoint(url),
            _ => Self::new(),
        }
    }

    /// Override the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a caller-configured HTTP client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a lead, reporting the typed failure cause.
    ///
    /// The caller is expected to have run [`crate::validate`] first;
    /// this layer does not re-check the form. Returns the endpoint's
    /// JSON body on success.
    pub async fn try_submit(&self, form: &LeadForm) -> SubmitResult<Value> {
        let payload = LeadPayload::from_form(form);

        debug!(
            endpoint = %self.endpoint,
            solution_type = %payload.solution_type,
            "Submitting lead"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status { status, body });
        }

        let data: Value = response.json().await.map_err(SubmitError::Parse)?;
        debug!(data = %data, "Lead accepted");
        Ok(data)
    }

    /// Submit a lead, collapsing every failure into a visitor-facing
    /// outcome.
    ///
    /// Never fails: transport and endpoint problems come back as
    /// `success: false` with the generic French message, and the cause
    /// goes to the log for operators.
    pub async fn submit(&self, form: &LeadForm) -> SubmitOutcome {
        match self.try_submit(form).await {
            Ok(data) => SubmitOutcome::accepted(data),
            Err(e) => {
                error!(error = %e, endpoint = %self.endpoint, "Lead submission failed");
                SubmitOutcome::rejected()
            }
        }
    }
}

impl Default for LeadClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_points_at_production() {
        let client = LeadClient::new();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_with_endpoint_overrides() {
        let client = LeadClient::new().with_endpoint("http://127.0.0.1:9999/submit");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9999/submit");
    }

    #[test]
    fn test_from_env_falls_back_to_production() {
        // Variable unset in the test environment
        std::env::remove_var(ENDPOINT_ENV);
        let client = LeadClient::from_env();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }
}
