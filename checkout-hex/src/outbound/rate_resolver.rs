//! USD → ZAR rate resolution with a single fallback hop.

use std::future::Future;
use std::time::Duration;

use exchange_rates::{ConversionRate, CurrencyCode, RateSource, RateSourceError};

use checkout_types::{ExchangeError, ExchangeRateProvider};

/// Upper bound on each upstream call.
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(5);

/// Asks the primary source; on any failure asks the secondary once.
///
/// Never retries the primary and never tries a third source. Worst-case
/// latency is two timeouts.
pub struct RateResolver<P: RateSource, S: RateSource> {
    primary: P,
    secondary: S,
    timeout: Duration,
}

impl<P: RateSource, S: RateSource> RateResolver<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self {
            primary,
            secondary,
            timeout: DEFAULT_SOURCE_TIMEOUT,
        }
    }

    /// Overrides the per-source timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn resolve(&self) -> Result<ConversionRate, ExchangeError> {
        let primary_err = match self.fetch(&self.primary).await {
            Ok(rate) => return Ok(rate),
            Err(e) => e,
        };
        tracing::warn!(
            source = self.primary.name(),
            error = %primary_err,
            "primary rate source failed, trying fallback"
        );

        match self.fetch(&self.secondary).await {
            Ok(rate) => Ok(rate),
            Err(secondary_err) => {
                tracing::error!(
                    primary_error = %primary_err,
                    secondary_error = %secondary_err,
                    "both rate sources failed"
                );
                Err(ExchangeError::ConversionUnavailable {
                    primary: format!("{}: {}", self.primary.name(), primary_err),
                    secondary: format!("{}: {}", self.secondary.name(), secondary_err),
                })
            }
        }
    }

    async fn fetch<R: RateSource>(&self, source: &R) -> Result<ConversionRate, RateSourceError> {
        bounded(self.timeout, source.fetch_rate(CurrencyCode::ZAR)).await
    }
}

#[async_trait::async_trait]
impl<P: RateSource + 'static, S: RateSource + 'static> ExchangeRateProvider
    for RateResolver<P, S>
{
    async fn usd_to_zar(&self) -> Result<ConversionRate, ExchangeError> {
        self.resolve().await
    }
}

/// One source, no fallback. Used for the fixed development rate.
pub struct SingleSource<R: RateSource> {
    source: R,
    timeout: Duration,
}

impl<R: RateSource> SingleSource<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            timeout: DEFAULT_SOURCE_TIMEOUT,
        }
    }
}

#[async_trait::async_trait]
impl<R: RateSource + 'static> ExchangeRateProvider for SingleSource<R> {
    async fn usd_to_zar(&self) -> Result<ConversionRate, ExchangeError> {
        bounded(self.timeout, self.source.fetch_rate(CurrencyCode::ZAR))
            .await
            .map_err(|e| {
                tracing::error!(source = self.source.name(), error = %e, "rate source failed");
                ExchangeError::SourceFailed {
                    name: self.source.name(),
                    reason: e.to_string(),
                }
            })
    }
}

async fn bounded<F>(timeout: Duration, call: F) -> Result<ConversionRate, RateSourceError>
where
    F: Future<Output = Result<ConversionRate, RateSourceError>>,
{
    tokio::time::timeout(timeout, call)
        .await
        .unwrap_or(Err(RateSourceError::Timeout))
}
