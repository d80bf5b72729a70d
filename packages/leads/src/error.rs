//! Typed errors for the leads library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while submitting a lead to the remote endpoint.
///
/// These never reach the end user: [`crate::client::LeadClient::submit`]
/// collapses them into a generic outcome and logs the cause. They are
/// surfaced by `try_submit` so operators and tests can tell failure modes
/// apart.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Request never completed (DNS, connect, TLS, request write)
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Endpoint answered outside the HTTP success range
    #[error("endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body was not valid JSON
    #[error("invalid JSON in response: {0}")]
    Parse(#[source] reqwest::Error),
}

/// Error returned when a solution category token is not recognized.
#[derive(Debug, Error)]
#[error("unknown solution category: {0}")]
pub struct UnknownSolution(pub String);

/// Result type alias for submission operations.
pub type SubmitResult<T> = std::result::Result<T, SubmitError>;
