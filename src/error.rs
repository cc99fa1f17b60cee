//! Error types for order submission and configuration

use crate::order::FormErrors;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Text shown to the customer for any failed submission attempt
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Result type for order operations
pub type OrderResult<T> = Result<T, OrderError>;

/// Everything that can go wrong between pressing submit and seeing a receipt
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    /// The form did not pass the schema
    #[error("Order form is invalid: {0}")]
    Validation(FormErrors),

    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The order service did not answer in time
    #[error("Order service timed out after {0:?}")]
    Timeout(Duration),

    /// The order service answered with a non-success status code
    #[error("Order service returned status {0}")]
    Status(u16),

    /// The order service answered 2xx but the body was unusable
    #[error("Invalid response from order service: {0}")]
    InvalidResponse(String),
}

impl OrderError {
    /// Create a network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        OrderError::Network(msg.into())
    }

    /// Create an invalid response error
    pub fn invalid_response<S: Into<String>>(msg: S) -> Self {
        OrderError::InvalidResponse(msg.into())
    }

    /// What the customer gets to see. Detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

impl From<reqwest::Error> for OrderError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            OrderError::Status(status.as_u16())
        } else if err.is_decode() {
            OrderError::InvalidResponse(err.to_string())
        } else {
            OrderError::Network(err.to_string())
        }
    }
}

/// Result type for configuration handling
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid order endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Unable to determine config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_order_error_collapses_to_the_generic_message() {
        let errors = vec![
            OrderError::Validation(FormErrors::default()),
            OrderError::network("connection refused"),
            OrderError::Timeout(Duration::from_secs(10)),
            OrderError::Status(500),
            OrderError::invalid_response("missing message"),
        ];

        for error in errors {
            assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn display_keeps_detail_for_logs() {
        assert_eq!(
            OrderError::Status(503).to_string(),
            "Order service returned status 503"
        );
    }
}
