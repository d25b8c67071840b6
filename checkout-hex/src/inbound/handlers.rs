//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use checkout_types::{
    AppError, DomainError, ErrorResponse, ExchangeRateProvider, INITIATION_FAILED,
    InitiatePaymentRequest, MISSING_AMOUNT_OR_PLAN, TokenSigner,
};

use crate::CheckoutService;

/// Application state shared across handlers.
pub struct AppState<X: ExchangeRateProvider, S: TokenSigner> {
    pub service: CheckoutService<X, S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
///
/// Clients only ever see the fixed messages; the underlying error goes to the log.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::InvalidRequest(reason) => {
                tracing::debug!(%reason, "rejected initiate-payment request");
                (StatusCode::BAD_REQUEST, MISSING_AMOUNT_OR_PLAN)
            }
            err => {
                tracing::error!(fault = err.fault(), error = %err, "payment initiation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INITIATION_FAILED)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Convert a USD price to ZAR and issue a signed payment token.
///
/// An unparseable body is treated like a missing field.
#[tracing::instrument(skip_all)]
pub async fn initiate_payment<X: ExchangeRateProvider, S: TokenSigner>(
    State(state): State<Arc<AppState<X, S>>>,
    payload: Result<Json<InitiatePaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload
        .map_err(|rejection| DomainError::ValidationError(rejection.body_text()))
        .map_err(AppError::from)?;

    let resp = state.service.initiate_payment(req).await?;
    Ok(Json(resp))
}
