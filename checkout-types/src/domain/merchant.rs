//! Merchant identity and per-attempt references.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::plan::PlanId;
use crate::error::DomainError;

pub const DEFAULT_ISSUER: &str = "EDUTEC";
pub const DEFAULT_CREDITOR_UID: &str = "9BA5008C-08EE-4286-A349-54AF91A621B0";
pub const DEFAULT_ACCOUNT_UID: &str = "23ADADC0-DA2D-4DAC-A128-4845A5D71293";

/// The fixed identifiers the gateway knows this merchant integration by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantProfile {
    issuer: String,
    creditor_uid: String,
    account_uid: String,
}

impl MerchantProfile {
    /// Builds a profile; both UIDs must be UUID-shaped.
    ///
    /// UIDs are kept exactly as given, since the gateway compares them as strings.
    pub fn new(
        issuer: impl Into<String>,
        creditor_uid: impl Into<String>,
        account_uid: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let issuer = issuer.into();
        if issuer.trim().is_empty() {
            return Err(DomainError::ValidationError("issuer cannot be empty".into()));
        }

        let creditor_uid = creditor_uid.into();
        let account_uid = account_uid.into();
        for uid in [&creditor_uid, &account_uid] {
            Uuid::parse_str(uid).map_err(|_| DomainError::InvalidMerchantUid(uid.clone()))?;
        }

        Ok(Self {
            issuer,
            creditor_uid,
            account_uid,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn creditor_uid(&self) -> &str {
        &self.creditor_uid
    }

    pub fn account_uid(&self) -> &str {
        &self.account_uid
    }
}

impl Default for MerchantProfile {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.into(),
            creditor_uid: DEFAULT_CREDITOR_UID.into(),
            account_uid: DEFAULT_ACCOUNT_UID.into(),
        }
    }
}

/// Reconciliation reference for one payment attempt: `SUB_<plan>_<unix millis>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerchantReference(String);

impl MerchantReference {
    pub fn new(plan: &PlanId, at: DateTime<Utc>) -> Self {
        Self(format!("SUB_{}_{}", plan, at.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The millisecond timestamp embedded at the end of the reference.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.rsplit_once('_').and_then(|(_, ms)| ms.parse().ok())
    }
}

impl fmt::Display for MerchantReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MerchantReference> for String {
    fn from(reference: MerchantReference) -> Self {
        reference.0
    }
}
