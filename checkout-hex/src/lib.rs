//! # Checkout Hex
//!
//! Application service layer and adapters for the subscription checkout service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validate, price, issue)
//! - `issuer/` - Payment payload construction and signing
//! - `outbound/` - Rate resolver with fallback, JWT signer
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `X: ExchangeRateProvider` and `S: TokenSigner`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod issuer;
pub mod openapi;
pub mod outbound;
pub mod service;


pub use issuer::{IssuedToken, PaymentTokenIssuer};
pub use service::CheckoutService;
