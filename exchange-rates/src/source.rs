//! Rate source port and its error type.

use crate::{ConversionRate, CurrencyCode};

/// Why a single rate source could not produce a rate.
#[derive(Debug, thiserror::Error)]
pub enum RateSourceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("response has no numeric {0} rate")]
    MissingRate(CurrencyCode),

    #[error("rate {0} is not a positive finite number")]
    InvalidRate(f64),

    #[error("provider reported an error: {0}")]
    Provider(String),

    #[error("expected a USD base, got {0}")]
    UnexpectedBase(String),
}

impl From<reqwest::Error> for RateSourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RateSourceError::Timeout
        } else if err.is_decode() {
            RateSourceError::Decode(err.to_string())
        } else {
            RateSourceError::Transport(err.to_string())
        }
    }
}

/// A single USD-based provider of exchange rates.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Short name used in logs and carried on the returned rate.
    fn name(&self) -> &'static str;

    /// Returns how many units of `quote` one USD buys.
    async fn fetch_rate(&self, quote: CurrencyCode) -> Result<ConversionRate, RateSourceError>;
}
