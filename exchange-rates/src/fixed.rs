//! Constant-rate source for offline development.

use crate::{ConversionRate, CurrencyCode, RateSource, RateSourceError};

/// Always answers with the same rate, whatever the quote currency.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateSource {
    rate: f64,
}

impl FixedRateSource {
    pub fn new(rate: f64) -> Result<Self, RateSourceError> {
        // validate once up front so fetch_rate cannot fail later
        ConversionRate::new(rate, "fixed")?;
        Ok(Self { rate })
    }
}

#[async_trait::async_trait]
impl RateSource for FixedRateSource {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_rate(&self, _quote: CurrencyCode) -> Result<ConversionRate, RateSourceError> {
        ConversionRate::new(self.rate, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_source_returns_configured_rate() {
        let source = FixedRateSource::new(18.5).unwrap();
        let rate = source.fetch_rate(CurrencyCode::ZAR).await.unwrap();
        assert_eq!(rate.value(), 18.5);
        assert_eq!(rate.source(), "fixed");
    }

    #[test]
    fn test_fixed_source_rejects_zero() {
        assert!(FixedRateSource::new(0.0).is_err());
    }
}
