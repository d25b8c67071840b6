//! Monetary amounts on both sides of the USD → ZAR conversion.

use std::fmt;

use exchange_rates::ConversionRate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A subscription price in US dollars, as sent by the caller.
///
/// Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UsdAmount(f64);

impl UsdAmount {
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::NonFiniteAmount);
        }
        if amount <= 0.0 {
            return Err(DomainError::NonPositiveAmount);
        }
        Ok(Self(amount))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UsdAmount {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UsdAmount> for f64 {
    fn from(amount: UsdAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for UsdAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// A rand amount held in cents.
///
/// `Display` always renders two fraction digits (`185.00`), which is the
/// format the payment gateway expects in the token payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZarAmount {
    cents: i64,
}

impl ZarAmount {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Converts at `rate` and rounds to the nearest cent (half away from zero).
    pub fn convert(amount: UsdAmount, rate: ConversionRate) -> Result<Self, DomainError> {
        let cents = (rate.apply(amount.value()) * 100.0).round();
        if !cents.is_finite() || cents >= i64::MAX as f64 {
            return Err(DomainError::AmountOutOfRange);
        }
        Ok(Self {
            cents: cents as i64,
        })
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }
}

impl fmt::Display for ZarAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(value: f64) -> ConversionRate {
        ConversionRate::new(value, "test").unwrap()
    }

    #[test]
    fn test_usd_amount_rejects_zero_and_negative() {
        assert!(matches!(
            UsdAmount::new(0.0),
            Err(DomainError::NonPositiveAmount)
        ));
        assert!(matches!(
            UsdAmount::new(-5.0),
            Err(DomainError::NonPositiveAmount)
        ));
        assert!(matches!(
            UsdAmount::new(f64::NAN),
            Err(DomainError::NonFiniteAmount)
        ));
    }

    #[test]
    fn test_monthly_plan_example() {
        let zar = ZarAmount::convert(UsdAmount::new(10.0).unwrap(), rate(18.5)).unwrap();
        assert_eq!(zar.cents(), 18500);
        assert_eq!(zar.to_string(), "185.00");
    }

    #[test]
    fn test_rounds_to_two_places() {
        // 9.99 * 18.2345 = 182.162655
        let zar = ZarAmount::convert(UsdAmount::new(9.99).unwrap(), rate(18.2345)).unwrap();
        assert_eq!(zar.to_string(), "182.16");

        // 1.5 * 18.337 = 27.5055
        let zar = ZarAmount::convert(UsdAmount::new(1.5).unwrap(), rate(18.337)).unwrap();
        assert_eq!(zar.to_string(), "27.51");
    }

    #[test]
    fn test_display_never_single_fraction_digit() {
        assert_eq!(ZarAmount::from_cents(1850).to_string(), "18.50");
        assert_eq!(ZarAmount::from_cents(5).to_string(), "0.05");
        assert_eq!(ZarAmount::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_large_amount_is_plain_decimal() {
        let zar = ZarAmount::convert(UsdAmount::new(1.0e9).unwrap(), rate(18.5)).unwrap();
        assert_eq!(zar.to_string(), "18500000000.00");
    }

    #[test]
    fn test_out_of_range_amount() {
        let result = ZarAmount::convert(UsdAmount::new(1.0e300).unwrap(), rate(18.5));
        assert!(matches!(result, Err(DomainError::AmountOutOfRange)));
    }

    #[test]
    fn test_usd_amount_deserialize_validates() {
        assert!(serde_json::from_str::<UsdAmount>("10").is_ok());
        assert!(serde_json::from_str::<UsdAmount>("-1").is_err());
    }
}
