//! Error types for the checkout service.

use crate::ports::{ExchangeError, SigningError};

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Amount must be a finite number")]
    NonFiniteAmount,

    #[error("Converted amount is out of range")]
    AmountOutOfRange,

    #[error("Plan cannot be empty")]
    EmptyPlan,

    #[error("Merchant UID is not a UUID: {0}")]
    InvalidMerchantUid(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Application-level errors (for HTTP responses).
///
/// Each variant maps to one HTTP status and one fixed client message; the
/// inner error is for logs only.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DomainError),

    #[error("Conversion unavailable: {0}")]
    ConversionUnavailable(#[from] ExchangeError),

    #[error("Signing unavailable: {0}")]
    SigningUnavailable(#[from] SigningError),
}

impl AppError {
    /// Which side is at fault, used as a log field so operators can tell an
    /// upstream outage from a broken deployment.
    pub fn fault(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "client",
            AppError::ConversionUnavailable(_) => "upstream",
            AppError::SigningUnavailable(_) => "configuration",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_classification() {
        assert_eq!(AppError::from(DomainError::EmptyPlan).fault(), "client");
        assert_eq!(
            AppError::from(ExchangeError::ConversionUnavailable {
                primary: "timeout".into(),
                secondary: "HTTP 502".into(),
            })
            .fault(),
            "upstream"
        );
        assert_eq!(
            AppError::from(SigningError::MissingSecret).fault(),
            "configuration"
        );
    }

    #[test]
    fn test_only_invalid_request_is_client_error() {
        assert!(AppError::from(DomainError::MissingField("amount")).is_client_error());
        assert!(!AppError::from(SigningError::MissingSecret).is_client_error());
    }
}
