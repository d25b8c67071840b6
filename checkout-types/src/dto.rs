//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{PlanId, UsdAmount};
use crate::error::DomainError;

/// Client message for any invalid initiate-payment request.
pub const MISSING_AMOUNT_OR_PLAN: &str = "Missing amount or plan";

/// Client message for any server-side failure while initiating a payment.
pub const INITIATION_FAILED: &str = "Failed to convert currency or generate token";

// ─────────────────────────────────────────────────────────────────────────────
// Payment Initiation DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to start a subscription payment.
///
/// Both fields are optional at the wire level so that a missing field is a
/// validation failure with a fixed message rather than a deserializer error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct InitiatePaymentRequest {
    /// Subscription price in USD
    #[schema(example = 10.0)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Subscription plan name
    #[schema(example = "monthly")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl InitiatePaymentRequest {
    pub fn new(amount: f64, plan: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            plan: Some(plan.into()),
        }
    }

    /// Checks presence first, then the value rules of each field.
    pub fn validate(&self) -> Result<(UsdAmount, PlanId), DomainError> {
        let amount = self.amount.ok_or(DomainError::MissingField("amount"))?;
        let plan = self
            .plan
            .as_deref()
            .ok_or(DomainError::MissingField("plan"))?;

        Ok((UsdAmount::new(amount)?, PlanId::new(plan)?))
    }
}

/// Response carrying the signed gateway token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentResponse {
    /// Signed payment-initiation token (HS256 JWT)
    pub token: String,
    /// Reconciliation reference, `SUB_<plan>_<unix millis>`
    #[schema(example = "SUB_monthly_1700000000123")]
    pub merchant_reference: String,
    /// Converted amount in ZAR with two fraction digits
    #[serde(rename = "amountZAR")]
    #[schema(example = "185.00")]
    pub amount_zar: String,
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Missing amount or plan")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing_fields() {
        let req: InitiatePaymentRequest = serde_json::from_str(r#"{"plan":"pro"}"#).unwrap();
        assert!(matches!(
            req.validate(),
            Err(DomainError::MissingField("amount"))
        ));

        let req: InitiatePaymentRequest = serde_json::from_str(r#"{"amount":10}"#).unwrap();
        assert!(matches!(req.validate(), Err(DomainError::MissingField("plan"))));

        let req: InitiatePaymentRequest =
            serde_json::from_str(r#"{"amount":null,"plan":null}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(InitiatePaymentRequest::new(0.0, "pro").validate().is_err());
        assert!(InitiatePaymentRequest::new(-3.0, "pro").validate().is_err());
        assert!(InitiatePaymentRequest::new(10.0, "").validate().is_err());
    }

    #[test]
    fn test_validate_ok() {
        let (amount, plan) = InitiatePaymentRequest::new(10.0, "monthly")
            .validate()
            .unwrap();
        assert_eq!(amount.value(), 10.0);
        assert_eq!(plan.as_str(), "monthly");
    }

    #[test]
    fn test_response_field_names() {
        let resp = InitiatePaymentResponse {
            token: "t".into(),
            merchant_reference: "SUB_pro_1".into(),
            amount_zar: "185.00".into(),
        };
        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(json["merchantReference"], "SUB_pro_1");
        assert_eq!(json["amountZAR"], "185.00");
        assert_eq!(json["token"], "t");
    }
}
