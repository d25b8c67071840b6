//! # Checkout Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging (and OTLP tracing when an endpoint is configured)
//! - Build the rate provider and token signer adapters
//! - Create the checkout service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use checkout_hex::{
    CheckoutService, PaymentTokenIssuer,
    inbound::HttpServer,
    outbound::{JwtSigner, RateResolver, SingleSource},
};
use checkout_types::ExchangeRateProvider;
use exchange_rates::{FixedRateSource, HttpRateSource, ResponseShape};

use config::{Config, LogFormat, RateSourceMode};

fn init_tracer(
    endpoint: &str,
) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("checkout-service"), provider))
}

fn build_rate_provider(config: &Config) -> anyhow::Result<Box<dyn ExchangeRateProvider>> {
    let provider: Box<dyn ExchangeRateProvider> = match config.rate_source {
        RateSourceMode::Live => {
            let primary = HttpRateSource::new(
                "primary",
                config.primary_rates_url.clone(),
                ResponseShape::RatesMap,
                config.rate_timeout,
            )?;
            let secondary = HttpRateSource::new(
                "secondary",
                config.secondary_rates_url.clone(),
                ResponseShape::OpenErApi,
                config.rate_timeout,
            )?;
            tracing::info!(
                primary = primary.url(),
                secondary = secondary.url(),
                "Using live exchange rates"
            );
            Box::new(RateResolver::new(primary, secondary).with_timeout(config.rate_timeout))
        }
        RateSourceMode::Fixed => {
            tracing::warn!(
                rate = config.fixed_zar_rate,
                "Using a FIXED USD/ZAR rate - do not run this in production"
            );
            Box::new(SingleSource::new(FixedRateSource::new(config.fixed_zar_rate)?))
        }
    };
    Ok(provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize OpenTelemetry tracing when an OTLP endpoint is configured
    let otel = config
        .otlp_endpoint
        .as_deref()
        .map(init_tracer)
        .transpose()?;
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,checkout_app=debug,checkout_hex=debug".into()),
        )
        .with(fmt_layer)
        .with(telemetry)
        .init();

    tracing::info!("Starting checkout server on port {}", config.port);

    let signer = JwtSigner::new(config.signing_secret.clone());
    if !signer.is_configured() {
        tracing::warn!(
            "ADUMO_SECRET_KEY is not set - every payment initiation will fail until it is configured"
        );
    }

    // Create the checkout service
    let rates = build_rate_provider(&config)?;
    let issuer = PaymentTokenIssuer::new(config.merchant.clone(), signer);
    let service = CheckoutService::new(rates, issuer);

    // Create and run the HTTP server
    let server = HttpServer::new(service).with_static_dir(&config.static_dir);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
