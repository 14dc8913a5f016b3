//! Checkout CLI
//!
//! Command-line interface for the checkout gateway API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use checkout_client::CheckoutClient;

#[derive(Parser)]
#[command(name = "checkout")]
#[command(author, version, about = "Checkout gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the checkout gateway
    #[arg(
        long,
        env = "CHECKOUT_API_URL",
        default_value = "http://localhost:8080"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway health
    Health,
    /// Request a client-rendering token
    Token,
    /// Create an order for the fixed checkout amount
    CreateOrder {
        /// Cart contents as JSON (informational only)
        #[arg(long, default_value = "[]")]
        cart: String,
    },
    /// Capture payment for an approved order
    Capture {
        /// Provider-issued order ID
        order_id: String,
    },
    /// Authorize payment for an approved order
    Authorize {
        /// Provider-issued order ID
        order_id: String,
    },
    /// Capture a previously created authorization
    CaptureAuthorization {
        /// Provider-issued authorization ID
        authorization_id: String,
    },
}

fn parse_cart(s: &str) -> Result<serde_json::Value> {
    serde_json::from_str(s).map_err(|e| anyhow::anyhow!("Invalid cart JSON: {}", e))
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
                println!("✓ Gateway is healthy");
            } else {
                println!("✗ Gateway is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Token => {
            let token = client.client_token().await?;
            println!("{}", serde_json::to_string_pretty(&token)?);
        }

        Commands::CreateOrder { cart } => {
            let cart = parse_cart(&cart)?;
            let order = client.create_order(cart).await?;
            println!("{}", serde_json::to_string_pretty(&order)?);
        }

        Commands::Capture { order_id } => {
            let capture = client.capture_order(&order_id).await?;
            println!("{}", serde_json::to_string_pretty(&capture)?);
        }

        Commands::Authorize { order_id } => {
            let authorization = client.authorize_order(&order_id).await?;
            println!("{}", serde_json::to_string_pretty(&authorization)?);
        }

        Commands::CaptureAuthorization { authorization_id } => {
            let capture = client.capture_authorization(&authorization_id).await?;
            println!("{}", serde_json::to_string_pretty(&capture)?);
        }
    }

    Ok(())
}
