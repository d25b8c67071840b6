//! Subscription plan identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The caller-supplied plan name (`monthly`, `pro`, ...).
///
/// Opaque to this service apart from being non-empty; it is embedded verbatim
/// in the merchant reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlanId(String);

impl PlanId {
    pub fn new(plan: impl Into<String>) -> Result<Self, DomainError> {
        let plan = plan.into();
        if plan.trim().is_empty() {
            return Err(DomainError::EmptyPlan);
        }
        Ok(Self(plan))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlanId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlanId> for String {
    fn from(plan: PlanId) -> Self {
        plan.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_accepts_name() {
        assert_eq!(PlanId::new("monthly").unwrap().as_str(), "monthly");
    }

    #[test]
    fn test_plan_rejects_empty_and_blank() {
        assert!(matches!(PlanId::new(""), Err(DomainError::EmptyPlan)));
        assert!(matches!(PlanId::new("   "), Err(DomainError::EmptyPlan)));
    }
}
