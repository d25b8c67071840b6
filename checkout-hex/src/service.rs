//! Checkout Application Service
//!
//! Orchestrates one payment initiation through the rate and signer ports.
//! Contains NO infrastructure logic - pure business orchestration.

use checkout_types::{
    AppError, ExchangeRateProvider, InitiatePaymentRequest, InitiatePaymentResponse, TokenSigner,
};

use crate::issuer::PaymentTokenIssuer;

/// Application service for subscription checkout.
///
/// Generic over the rate provider and the token signer - adapters are injected
/// at compile time. This enables:
/// - Swapping live rate sources for a fixed rate without code changes
/// - Testing with mock providers and signers
/// - Compile-time checks for port implementation
pub struct CheckoutService<X: ExchangeRateProvider, S: TokenSigner> {
    rates: X,
    issuer: PaymentTokenIssuer<S>,
}

impl<X: ExchangeRateProvider, S: TokenSigner> CheckoutService<X, S> {
    /// Creates a new checkout service.
    pub fn new(rates: X, issuer: PaymentTokenIssuer<S>) -> Self {
        Self { rates, issuer }
    }

    /// Returns a reference to the underlying rate provider.
    pub fn rates(&self) -> &X {
        &self.rates
    }

    /// Returns a reference to the token issuer.
    pub fn issuer(&self) -> &PaymentTokenIssuer<S> {
        &self.issuer
    }

    /// Validates the request, prices it in ZAR and issues a signed token.
    ///
    /// Validation runs before any upstream call, so a bad request never costs
    /// a rate lookup.
    #[tracing::instrument(skip(self, req), fields(plan = req.plan.as_deref().unwrap_or("")))]
    pub async fn initiate_payment(
        &self,
        req: InitiatePaymentRequest,
    ) -> Result<InitiatePaymentResponse, AppError> {
        let (amount, plan) = req.validate()?;

        let rate = self.rates.usd_to_zar().await?;
        tracing::info!(rate = rate.value(), source = rate.source(), "resolved USD/ZAR rate");

        let issued = self.issuer.issue(amount, &plan, rate)?;
        tracing::info!(
            merchant_reference = %issued.merchant_reference,
            amount_zar = %issued.amount_zar,
            "issued payment token"
        );

        Ok(InitiatePaymentResponse {
            token: issued.token,
            merchant_reference: issued.merchant_reference.into(),
            amount_zar: issued.amount_zar.to_string(),
        })
    }
}
