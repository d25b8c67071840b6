//! Checkout CLI
//!
//! Command-line interface for the Checkout API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use checkout_client::CheckoutClient;
use checkout_hex::outbound::JwtSigner;

#[derive(Parser)]
#[command(name = "checkout")]
#[command(author, version, about = "Subscription checkout CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Checkout API
    #[arg(
        long,
        env = "CHECKOUT_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a subscription in ZAR and obtain a signed payment token
    Initiate {
        /// Subscription price in USD
        #[arg(long)]
        amount: f64,
        /// Plan name (e.g. monthly)
        #[arg(long)]
        plan: String,
    },
    /// Verify a payment token and print its claims
    DecodeToken {
        /// The token returned by `initiate`
        token: String,
        /// Signing secret shared with the payment gateway
        #[arg(long, env = "ADUMO_SECRET_KEY", hide_env_values = true)]
        secret: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let client = CheckoutClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Initiate { amount, plan } => {
            let resp = client.initiate_payment(amount, &plan).await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }

        Commands::DecodeToken { token, secret } => {
            let claims = JwtSigner::from_secret(secret).verify(&token)?;
            println!("{}", serde_json::to_string_pretty(&claims)?);

            let remaining = claims.expires_at - chrono::Utc::now().timestamp();
            println!("valid for another {}s", remaining.max(0));
        }
    }

    Ok(())
}
