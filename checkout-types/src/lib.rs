//! # Checkout Types
//!
//! Domain types and port traits for the subscription checkout service.
//! This crate has ZERO IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (amounts, plan, merchant reference, token payload)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    JobTokenId, MerchantProfile, MerchantReference, PAYLOAD_TTL_SECS, PaymentPayload, PlanId,
    UsdAmount, ZarAmount,
};
pub use dto::*;
pub use error::{AppError, DomainError};
pub use exchange_rates::{ConversionRate, CurrencyCode};
pub use ports::{ExchangeError, ExchangeRateProvider, SigningError, TokenSigner};
