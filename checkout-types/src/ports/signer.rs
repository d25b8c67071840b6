//! Token signer port.

use crate::domain::PaymentPayload;

/// Error type for signing and verification.
///
/// `MissingSecret` and `Encode` are deployment faults, not caller mistakes.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("signing secret is not configured")]
    MissingSecret,

    #[error("failed to sign payload: {0}")]
    Encode(String),

    #[error("token rejected: {0}")]
    Verify(String),
}

/// Port trait for turning a payment payload into an opaque signed token.
pub trait TokenSigner: Send + Sync + 'static {
    fn sign(&self, payload: &PaymentPayload) -> Result<String, SigningError>;
}
