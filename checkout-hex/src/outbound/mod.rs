//! Outbound Adapters
//!
//! Implementations of the rate and signer ports.

mod jwt;
mod rate_resolver;

pub use jwt::JwtSigner;
pub use rate_resolver::{DEFAULT_SOURCE_TIMEOUT, RateResolver, SingleSource};
