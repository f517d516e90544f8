//! Error types for executing BAPI calls.
//!
//! - [`TransportError`]: the call did not produce an accepted response
//!   (rejected status code, or a network, DNS or timeout failure)
//! - [`ValidationError`]: a response arrived but its body was rejected
//! - [`BapiError`]: unified error returned by `execute`
//!
//! Nothing is retried; every failure surfaces to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use bapi_client::{BapiError, TransportError};
//!
//! match client.execute(&call).await {
//!     Ok(response) => println!("{} products", response.data.entities.len()),
//!     Err(BapiError::Transport(TransportError::Status { code, .. })) => {
//!         println!("BAPI answered {code}");
//!     }
//!     Err(e) => println!("Failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// The call failed before an accepted response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The response status code was not accepted.
    #[error("{message}")]
    Status {
        /// The HTTP status code of the response.
        code: u16,
        /// Human readable message, `Request failed with status code {code}`.
        message: String,
        /// The raw response body, for diagnostics.
        body: String,
    },

    /// Network, DNS, TLS or timeout failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TransportError {
    /// Creates a status error with the standard message.
    #[must_use]
    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: format!("Request failed with status code {code}"),
            body: body.into(),
        }
    }

    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// The response body was rejected.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The call's response validator returned `false`.
    #[error("Invalid response data")]
    Rejected,

    /// The body is not valid JSON or does not match the expected type.
    #[error("Invalid response data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Unified error type for BAPI calls.
#[derive(Debug, Error)]
pub enum BapiError {
    /// The call did not produce an accepted response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for BapiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(TransportError::Network(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_status_code() {
        let error = TransportError::status(404, r#"{"message":"not found"}"#);
        assert_eq!(error.to_string(), "Request failed with status code 404");
        assert_eq!(error.code(), Some(404));
    }

    #[test]
    fn test_bapi_error_is_transparent_over_transport() {
        let error: BapiError = TransportError::status(500, "").into();
        assert_eq!(error.to_string(), "Request failed with status code 500");
    }

    #[test]
    fn test_rejected_validation_message() {
        let error: BapiError = ValidationError::Rejected.into();
        assert_eq!(error.to_string(), "Invalid response data");
        assert!(matches!(error, BapiError::Validation(ValidationError::Rejected)));
    }

    #[test]
    fn test_malformed_validation_wraps_serde_error() {
        let serde_error = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let error = ValidationError::from(serde_error);
        assert!(error.to_string().starts_with("Invalid response data: "));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &TransportError::status(400, "");
        let _: &dyn std::error::Error = &ValidationError::Rejected;
        let _: &dyn std::error::Error = &BapiError::Config(ConfigError::InvalidShopId);
    }
}
