//! Payment token issuance.
//!
//! Turns a validated USD price, plan and rate into a signed gateway token.
//! No IO: the only collaborator is the injected [`TokenSigner`].

use chrono::{DateTime, Utc};

use checkout_types::domain::JOB_TOKEN_BYTES;
use checkout_types::{
    AppError, ConversionRate, JobTokenId, MerchantProfile, MerchantReference, PaymentPayload,
    PlanId, TokenSigner, UsdAmount, ZarAmount,
};

/// Result of a successful issuance.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub merchant_reference: MerchantReference,
    pub amount_zar: ZarAmount,
}

/// Builds and signs payment payloads for one merchant profile.
pub struct PaymentTokenIssuer<S: TokenSigner> {
    merchant: MerchantProfile,
    signer: S,
}

impl<S: TokenSigner> PaymentTokenIssuer<S> {
    pub fn new(merchant: MerchantProfile, signer: S) -> Self {
        Self { merchant, signer }
    }

    pub fn merchant(&self) -> &MerchantProfile {
        &self.merchant
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Issues a token stamped with the current wall-clock time.
    pub fn issue(
        &self,
        amount: UsdAmount,
        plan: &PlanId,
        rate: ConversionRate,
    ) -> Result<IssuedToken, AppError> {
        self.issue_at(Utc::now(), amount, plan, rate)
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        now: DateTime<Utc>,
        amount: UsdAmount,
        plan: &PlanId,
        rate: ConversionRate,
    ) -> Result<IssuedToken, AppError> {
        let amount_zar = ZarAmount::convert(amount, rate)?;
        let merchant_reference = MerchantReference::new(plan, now);

        let payload = PaymentPayload::new(
            &self.merchant,
            amount_zar,
            merchant_reference.clone(),
            new_job_token_id(),
            now,
        );
        let token = self.signer.sign(&payload)?;

        Ok(IssuedToken {
            token,
            merchant_reference,
            amount_zar,
        })
    }
}

/// Fresh `jti` from the thread-local CSPRNG.
fn new_job_token_id() -> JobTokenId {
    JobTokenId::from_bytes(rand::random::<[u8; JOB_TOKEN_BYTES]>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Mutex;

    use checkout_types::SigningError;

    /// Records payloads and returns their JSON as the "token".
    struct RecordingSigner {
        seen: Mutex<Vec<PaymentPayload>>,
    }

    impl TokenSigner for RecordingSigner {
        fn sign(&self, payload: &PaymentPayload) -> Result<String, SigningError> {
            self.seen.lock().unwrap().push(payload.clone());
            Ok(format!("signed:{}", payload.job_token_id))
        }
    }

    struct BrokenSigner;

    impl TokenSigner for BrokenSigner {
        fn sign(&self, _payload: &PaymentPayload) -> Result<String, SigningError> {
            Err(SigningError::MissingSecret)
        }
    }

    fn issuer() -> PaymentTokenIssuer<RecordingSigner> {
        PaymentTokenIssuer::new(
            MerchantProfile::default(),
            RecordingSigner {
                seen: Mutex::new(Vec::new()),
            },
        )
    }

    fn rate(value: f64) -> ConversionRate {
        ConversionRate::new(value, "test").unwrap()
    }

    #[test]
    fn test_issue_builds_payload() {
        let issuer = issuer();
        let now = Utc.timestamp_millis_opt(1_700_000_000_789).unwrap();
        let plan = PlanId::new("monthly").unwrap();

        let issued = issuer
            .issue_at(now, UsdAmount::new(10.0).unwrap(), &plan, rate(18.5))
            .unwrap();

        assert_eq!(issued.amount_zar.to_string(), "185.00");
        assert_eq!(
            issued.merchant_reference.as_str(),
            "SUB_monthly_1700000000789"
        );

        let seen = issuer.signer().seen.lock().unwrap();
        let payload = &seen[0];
        assert_eq!(payload.issuer, "EDUTEC");
        assert_eq!(payload.amount, "185.00");
        assert_eq!(payload.issued_at, 1_700_000_000);
        assert_eq!(payload.expires_at, payload.issued_at + 600);
        assert_eq!(issued.token, format!("signed:{}", payload.job_token_id));
    }

    #[test]
    fn test_each_issue_gets_a_new_nonce() {
        let issuer = issuer();
        let plan = PlanId::new("pro").unwrap();
        let amount = UsdAmount::new(5.0).unwrap();

        let first = issuer.issue(amount, &plan, rate(18.0)).unwrap();
        let second = issuer.issue(amount, &plan, rate(18.0)).unwrap();

        assert_ne!(first.token, second.token);
        let seen = issuer.signer().seen.lock().unwrap();
        assert_ne!(seen[0].job_token_id, seen[1].job_token_id);
    }

    #[test]
    fn test_signing_failure_is_signing_unavailable() {
        let issuer = PaymentTokenIssuer::new(MerchantProfile::default(), BrokenSigner);
        let plan = PlanId::new("pro").unwrap();

        let err = issuer
            .issue(UsdAmount::new(5.0).unwrap(), &plan, rate(18.0))
            .unwrap_err();
        assert!(matches!(err, AppError::SigningUnavailable(_)));
        assert_eq!(err.fault(), "configuration");
    }
}
