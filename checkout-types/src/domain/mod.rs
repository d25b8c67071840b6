//! Domain models for the checkout service.

pub mod merchant;
pub mod money;
pub mod payload;
pub mod plan;

pub use merchant::{MerchantProfile, MerchantReference};
pub use money::{UsdAmount, ZarAmount};
pub use payload::{JOB_TOKEN_BYTES, JobTokenId, PAYLOAD_TTL_SECS, PaymentPayload};
pub use plan::PlanId;
