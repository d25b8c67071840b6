//! Client example demonstrating a payment initiation against an in-process server.
//!
//! Uses a fixed USD/ZAR rate so it runs offline.
//!
//! Run with: cargo run -p checkout-app --example client_example

use checkout_client::{CheckoutClient, ClientError};
use checkout_hex::{
    CheckoutService, PaymentTokenIssuer,
    inbound::HttpServer,
    outbound::{JwtSigner, SingleSource},
};
use checkout_types::MerchantProfile;
use exchange_rates::FixedRateSource;
use std::net::SocketAddr;
use tokio::net::TcpListener;

const SECRET: &str = "example-secret";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    println!("🚀 Starting server on {addr} with a fixed rate of 18.50 ZAR/USD...");

    let service = CheckoutService::new(
        SingleSource::new(FixedRateSource::new(18.5)?),
        PaymentTokenIssuer::new(MerchantProfile::default(), JwtSigner::from_secret(SECRET)),
    );
    let router = HttpServer::new(service).router();
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    let client = CheckoutClient::new(format!("http://{addr}"));
    println!("✓ healthy: {}", client.health().await?);

    let resp = client.initiate_payment(10.0, "monthly").await?;
    println!("✓ merchant reference: {}", resp.merchant_reference);
    println!("✓ amount: R{}", resp.amount_zar);

    let claims = JwtSigner::from_secret(SECRET).verify(&resp.token)?;
    println!(
        "✓ token valid from {} to {} (jti {})",
        claims.issued_at, claims.expires_at, claims.job_token_id
    );

    match client.initiate_payment(10.0, "").await {
        Err(ClientError::Api { status, message }) => {
            println!("✓ empty plan rejected: {status} {message}")
        }
        other => println!("✗ expected a 400, got {other:?}"),
    }

    Ok(())
}
