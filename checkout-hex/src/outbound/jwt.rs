//! HS256 JWT signer backed by the gateway's shared secret.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use checkout_types::{PaymentPayload, SigningError, TokenSigner};

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signs payment payloads with the process-wide secret.
///
/// Constructing one without a secret is allowed; every sign/verify call then
/// fails with [`SigningError::MissingSecret`].
pub struct JwtSigner {
    keys: Option<Keys>,
}

impl JwtSigner {
    /// An empty secret counts as no secret.
    pub fn new(secret: Option<String>) -> Self {
        let keys = secret.filter(|s| !s.is_empty()).map(|s| Keys {
            encoding: EncodingKey::from_secret(s.as_bytes()),
            decoding: DecodingKey::from_secret(s.as_bytes()),
        });
        Self { keys }
    }

    pub fn from_secret(secret: impl Into<String>) -> Self {
        Self::new(Some(secret.into()))
    }

    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    /// Checks signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<PaymentPayload, SigningError> {
        let keys = self.keys.as_ref().ok_or(SigningError::MissingSecret)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "iat"]);
        validation.leeway = 0;

        decode::<PaymentPayload>(token, &keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| SigningError::Verify(e.to_string()))
    }
}

impl std::fmt::Debug for JwtSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSigner")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, payload: &PaymentPayload) -> Result<String, SigningError> {
        let keys = self.keys.as_ref().ok_or(SigningError::MissingSecret)?;
        encode(&Header::new(Algorithm::HS256), payload, &keys.encoding)
            .map_err(|e| SigningError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    use checkout_types::domain::JOB_TOKEN_BYTES;
    use checkout_types::{JobTokenId, MerchantProfile, MerchantReference, PlanId, ZarAmount};

    fn payload_at(at: chrono::DateTime<Utc>) -> PaymentPayload {
        let plan = PlanId::new("monthly").unwrap();
        PaymentPayload::new(
            &MerchantProfile::default(),
            ZarAmount::from_cents(18500),
            MerchantReference::new(&plan, at),
            JobTokenId::from_bytes([7; JOB_TOKEN_BYTES]),
            at,
        )
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = JwtSigner::from_secret("gateway-secret");
        let payload = payload_at(Utc::now());

        let token = signer.sign(&payload).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims, payload);
        assert_eq!(claims.expires_at, claims.issued_at + 600);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = JwtSigner::from_secret("right")
            .sign(&payload_at(Utc::now()))
            .unwrap();

        let err = JwtSigner::from_secret("wrong").verify(&token).unwrap_err();
        assert!(matches!(err, SigningError::Verify(_)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let signer = JwtSigner::from_secret("gateway-secret");
        let token = signer
            .sign(&payload_at(Utc::now() - Duration::minutes(11)))
            .unwrap();

        assert!(matches!(signer.verify(&token), Err(SigningError::Verify(_))));
    }

    #[test]
    fn test_missing_secret() {
        let payload = payload_at(Utc.timestamp_opt(1_700_000_000, 0).unwrap());

        for signer in [JwtSigner::new(None), JwtSigner::new(Some(String::new()))] {
            assert!(!signer.is_configured());
            assert!(matches!(
                signer.sign(&payload),
                Err(SigningError::MissingSecret)
            ));
        }
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug = format!("{:?}", JwtSigner::from_secret("super-secret"));
        assert!(!debug.contains("super-secret"));
    }
}
