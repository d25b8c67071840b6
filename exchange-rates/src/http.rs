//! Live HTTP rate sources.

use std::time::Duration;

use serde_json::Value;

use crate::{ConversionRate, CurrencyCode, RateSource, RateSourceError};

/// JSON layout a provider answers with.
///
/// Both supported providers carry a `rates` map keyed by currency code; they
/// differ in how they report provider-side failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{ "rates": { "ZAR": 18.5, ... } }` (exchangerate.host)
    RatesMap,
    /// `{ "result": "success", "base_code": "USD", "rates": { ... } }` (open.er-api.com).
    /// Failures come back as `{ "result": "error", "error-type": "..." }`.
    OpenErApi,
}

impl ResponseShape {
    /// Pulls the `quote` rate out of a decoded response body.
    pub fn extract(&self, body: &Value, quote: CurrencyCode) -> Result<f64, RateSourceError> {
        if let ResponseShape::OpenErApi = self {
            match body.get("result").and_then(Value::as_str) {
                Some("success") => {}
                Some(_) => {
                    let kind = body
                        .get("error-type")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown");
                    return Err(RateSourceError::Provider(kind.to_string()));
                }
                None => return Err(RateSourceError::Decode("missing `result` field".into())),
            }

            if let Some(base) = body.get("base_code").and_then(Value::as_str) {
                if base != CurrencyCode::USD.code() {
                    return Err(RateSourceError::UnexpectedBase(base.to_string()));
                }
            }
        }

        body.get("rates")
            .and_then(|rates| rates.get(quote.code()))
            .and_then(Value::as_f64)
            .ok_or(RateSourceError::MissingRate(quote))
    }
}

/// A provider reached over HTTP GET with a bounded timeout.
pub struct HttpRateSource {
    name: &'static str,
    url: String,
    shape: ResponseShape,
    client: reqwest::Client,
}

impl HttpRateSource {
    /// Creates a source; `timeout` bounds the whole exchange, body included.
    pub fn new(
        name: &'static str,
        url: impl Into<String>,
        shape: ResponseShape,
        timeout: Duration,
    ) -> Result<Self, RateSourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            name,
            url: url.into(),
            shape,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl RateSource for HttpRateSource {
    fn name(&self) -> &'static str {
        self.name
    }

    #[tracing::instrument(skip(self), fields(source = self.name, url = %self.url))]
    async fn fetch_rate(&self, quote: CurrencyCode) -> Result<ConversionRate, RateSourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateSourceError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let rate = self.shape.extract(&body, quote)?;
        tracing::debug!(rate, "fetched rate");

        ConversionRate::new(rate, self.name)
    }
}
