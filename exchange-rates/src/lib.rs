//! USD-Based Exchange Rate Sources
//!
//! This library answers one question: how many units of a quote currency does
//! one US dollar buy right now? Every source in here is USD-based; callers ask
//! for a quote currency and get back a validated [`ConversionRate`].
//!
//! # Sources
//! - [`HttpRateSource`] - live JSON endpoint, decoded through a [`ResponseShape`]
//! - [`FixedRateSource`] - constant rate for offline development and tests
//!
//! # Example
//! ```no_run
//! use std::time::Duration;
//! use exchange_rates::{CurrencyCode, HttpRateSource, RateSource, ResponseShape};
//!
//! # async fn run() -> Result<(), exchange_rates::RateSourceError> {
//! let source = HttpRateSource::new(
//!     "primary",
//!     "https://api.exchangerate.host/latest?base=USD&symbols=ZAR",
//!     ResponseShape::RatesMap,
//!     Duration::from_secs(5),
//! )?;
//! let rate = source.fetch_rate(CurrencyCode::ZAR).await?;
//! println!("1 USD = {} ZAR", rate.value());
//! # Ok(())
//! # }
//! ```

mod fixed;
mod http;
mod source;

pub use fixed::FixedRateSource;
pub use http::{HttpRateSource, ResponseShape};
pub use source::{RateSource, RateSourceError};

// ─────────────────────────────────────────────────────────────────────────────
// Currency Codes
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the supported currency codes with their display metadata.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Name => ("CODE", "SYMBOL"),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err(format!("Unknown currency: {}", s)),
                }
            }
        }
    };
}

define_currencies! {
    USD => ("USD", "$"),
    ZAR => ("ZAR", "R"),
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion Rate
// ─────────────────────────────────────────────────────────────────────────────

/// Units of the quote currency per 1 USD, tagged with the source that produced it.
///
/// Always positive and finite; the constructor rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRate {
    value: f64,
    source: &'static str,
}

impl ConversionRate {
    pub fn new(value: f64, source: &'static str) -> Result<Self, RateSourceError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(RateSourceError::InvalidRate(value));
        }
        Ok(Self { value, source })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Name of the source this rate came from (`primary`, `secondary`, `fixed`...).
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Converts a USD amount into the quote currency, unrounded.
    pub fn apply(&self, usd: f64) -> f64 {
        usd * self.value
    }
}

impl std::fmt::Display for ConversionRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (via {})", self.value, self.source)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
