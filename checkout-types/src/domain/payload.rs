//! Payment-initiation payload carried inside the signed token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::merchant::{MerchantProfile, MerchantReference};
use super::money::ZarAmount;

/// How long an issued token stays valid, in seconds.
pub const PAYLOAD_TTL_SECS: i64 = 600;

/// Size of the random material behind a [`JobTokenId`].
pub const JOB_TOKEN_BYTES: usize = 16;

/// Anti-replay nonce (`jti`): random bytes, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobTokenId(String);

impl JobTokenId {
    pub fn from_bytes(bytes: [u8; JOB_TOKEN_BYTES]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobTokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// JWT claims the gateway expects. Field names on the wire are the short
/// claim names (`iss`, `cuid`, `auid`, `mref`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPayload {
    #[serde(rename = "iss")]
    pub issuer: String,
    #[serde(rename = "cuid")]
    pub creditor_uid: String,
    #[serde(rename = "auid")]
    pub account_uid: String,
    /// ZAR, two fraction digits.
    pub amount: String,
    #[serde(rename = "mref")]
    pub merchant_reference: MerchantReference,
    #[serde(rename = "jti")]
    pub job_token_id: JobTokenId,
    #[serde(rename = "iat")]
    pub issued_at: i64,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl PaymentPayload {
    /// Assembles the claims; `exp` is always `iat + PAYLOAD_TTL_SECS`.
    pub fn new(
        merchant: &MerchantProfile,
        amount: ZarAmount,
        merchant_reference: MerchantReference,
        job_token_id: JobTokenId,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let iat = issued_at.timestamp();
        Self {
            issuer: merchant.issuer().to_string(),
            creditor_uid: merchant.creditor_uid().to_string(),
            account_uid: merchant.account_uid().to_string(),
            amount: amount.to_string(),
            merchant_reference,
            job_token_id,
            issued_at: iat,
            expires_at: iat + PAYLOAD_TTL_SECS,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.expires_at - self.issued_at
    }
}
