//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use checkout_types::MerchantProfile;
use checkout_types::domain::merchant::{DEFAULT_ACCOUNT_UID, DEFAULT_CREDITOR_UID, DEFAULT_ISSUER};

const DEFAULT_PRIMARY_RATES_URL: &str = "https://api.exchangerate.host/latest?base=USD&symbols=ZAR";
const DEFAULT_SECONDARY_RATES_URL: &str = "https://open.er-api.com/v6/latest/USD";

/// Where USD/ZAR rates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSourceMode {
    /// Primary provider with one fallback provider.
    Live,
    /// A constant rate, for working offline.
    Fixed,
}

impl FromStr for RateSourceMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "fixed" => Ok(Self::Fixed),
            other => anyhow::bail!("RATE_SOURCE must be `live` or `fixed`, got `{}`", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("LOG_FORMAT must be `pretty` or `json`, got `{}`", other),
        }
    }
}

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// Shared secret with the payment gateway; absent means every
    /// initiation fails until it is configured.
    pub signing_secret: Option<String>,
    pub primary_rates_url: String,
    pub secondary_rates_url: String,
    pub rate_timeout: Duration,
    pub rate_source: RateSourceMode,
    pub fixed_zar_rate: f64,
    pub static_dir: PathBuf,
    pub merchant: MerchantProfile,
    pub log_format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let port = parse(&var("PORT", "3000"), "PORT")?;
        let rate_timeout_secs: u64 = parse(&var("RATE_TIMEOUT_SECS", "5"), "RATE_TIMEOUT_SECS")?;
        if rate_timeout_secs == 0 {
            anyhow::bail!("RATE_TIMEOUT_SECS must be at least 1");
        }

        let merchant = MerchantProfile::new(
            var("MERCHANT_ISSUER", DEFAULT_ISSUER),
            var("MERCHANT_CREDITOR_UID", DEFAULT_CREDITOR_UID),
            var("MERCHANT_ACCOUNT_UID", DEFAULT_ACCOUNT_UID),
        )
        .context("invalid merchant profile")?;

        Ok(Self {
            port,
            signing_secret: get("ADUMO_SECRET_KEY").filter(|s| !s.is_empty()),
            primary_rates_url: var("PRIMARY_RATES_URL", DEFAULT_PRIMARY_RATES_URL),
            secondary_rates_url: var("SECONDARY_RATES_URL", DEFAULT_SECONDARY_RATES_URL),
            rate_timeout: Duration::from_secs(rate_timeout_secs),
            rate_source: var("RATE_SOURCE", "live").parse()?,
            fixed_zar_rate: parse(&var("FIXED_ZAR_RATE", "18.50"), "FIXED_ZAR_RATE")?,
            static_dir: PathBuf::from(var("STATIC_DIR", "static")),
            merchant,
            log_format: var("LOG_FORMAT", "pretty").parse()?,
            otlp_endpoint: get("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty()),
        })
    }
}

fn parse<T>(value: &str, key: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("{} has an invalid value: `{}`", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.signing_secret.is_none());
        assert_eq!(config.rate_timeout, Duration::from_secs(5));
        assert_eq!(config.rate_source, RateSourceMode::Live);
        assert_eq!(config.secondary_rates_url, DEFAULT_SECONDARY_RATES_URL);
        assert_eq!(config.merchant, MerchantProfile::default());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("ADUMO_SECRET_KEY", "s3cret"),
            ("RATE_SOURCE", "fixed"),
            ("FIXED_ZAR_RATE", "17.9"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.signing_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.rate_source, RateSourceMode::Fixed);
        assert_eq!(config.fixed_zar_rate, 17.9);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let config = load(&[("ADUMO_SECRET_KEY", "")]).unwrap();
        assert!(config.signing_secret.is_none());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(load(&[("PORT", "not-a-port")]).is_err());
        assert!(load(&[("RATE_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("RATE_SOURCE", "cached")]).is_err());
        assert!(load(&[("MERCHANT_CREDITOR_UID", "nope")]).is_err());
    }
}
