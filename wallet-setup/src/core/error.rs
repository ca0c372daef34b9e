//! # Common Error Types
//!
//! Consolidated error handling for the create-wallet workflow.
//!
//! ## Error Categories
//!
//! - **Api**: Transport failures talking to the wallet service (network, HTTP, JSON parsing)
//! - **Rejected**: The wallet service answered with an error body (e.g. wallet name taken)
//! - **Validation**: Local input validation failures
//! - **State**: An action that is not valid in the current workflow step
//! - **Config**: Missing or malformed configuration
//!
//! A failed create-wallet call (`Api` or `Rejected`) reaches the user as a
//! form-level notice. The others are logged and the offending action is ignored.

use thiserror::Error;

/// Error type for every fallible operation in the crate.
///
/// `Clone` because results travel from the create-wallet task to the
/// workflow owner inside [`crate::app::FlowEvent`].
///
/// ```rust
/// use wallet_setup::core::error::AppError;
///
/// let err = AppError::Rejected("Wallet file already exists".to_string());
/// assert_eq!(err.to_string(), "Request rejected: Wallet file already exists");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Wallet service communication error.
    ///
    /// Network failures, timeouts, unexpected status codes without an error
    /// body, malformed JSON.
    #[error("API error: {0}")]
    Api(String),

    /// The wallet service answered with an error body.
    ///
    /// Carries the service's own message.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Action not allowed in the current step.
    ///
    /// Includes a second submit while a creation request is in flight.
    #[error("State error: {0}")]
    State(String),

    /// Configuration error during startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the error should be shown to the user as a form-level notice.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AppError::Api(_) | AppError::Rejected(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Api(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            AppError::Api(format!("Failed to parse response: {}", err))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}
