//! Exchange rate provider port.
//!
//! This trait defines the interface the checkout flow uses to price a
//! subscription in rand. Implementations can be live HTTP resolvers, a fixed
//! development rate, mocks, etc.

use exchange_rates::ConversionRate;

/// Error type for exchange rate operations.
///
/// Raw transport failures never cross this port; adapters fold them into one
/// of these variants with a human-readable reason.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("both rate sources failed (primary: {primary}; secondary: {secondary})")]
    ConversionUnavailable { primary: String, secondary: String },

    #[error("rate source {name} failed: {reason}")]
    SourceFailed { name: &'static str, reason: String },
}

/// Port trait for USD → ZAR rate providers.
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync + 'static {
    /// Returns how many rand one US dollar buys right now.
    async fn usd_to_zar(&self) -> Result<ConversionRate, ExchangeError>;
}

#[async_trait::async_trait]
impl<T: ExchangeRateProvider + ?Sized> ExchangeRateProvider for Box<T> {
    async fn usd_to_zar(&self) -> Result<ConversionRate, ExchangeError> {
        (**self).usd_to_zar().await
    }
}
