//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use checkout_types::dto::{ErrorResponse, InitiatePaymentRequest, InitiatePaymentResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert a USD subscription price to ZAR and issue a signed payment token
#[utoipa::path(
    post,
    path = "/api/initiate-payment",
    tag = "payments",
    request_body = InitiatePaymentRequest,
    responses(
        (status = 200, description = "Token issued", body = InitiatePaymentResponse),
        (status = 400, description = "Amount or plan missing or invalid", body = ErrorResponse,
            example = json!({"error": "Missing amount or plan"})),
        (status = 500, description = "Both rate sources failed or signing is not configured", body = ErrorResponse,
            example = json!({"error": "Failed to convert currency or generate token"}))
    )
)]
async fn initiate_payment() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Subscription Checkout API",
        version = "0.1.0",
        description = "Prices subscriptions in ZAR and issues signed payment-initiation tokens"
    ),
    paths(health, initiate_payment),
    components(schemas(InitiatePaymentRequest, InitiatePaymentResponse, ErrorResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment initiation"),
    )
)]
pub struct ApiDoc;
