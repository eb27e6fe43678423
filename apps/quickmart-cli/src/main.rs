//! # Quickmart CLI
//!
//! Runs the sample store checkout and prints the result.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        quickmart-cli                                    │
//! │                                                                         │
//! │  RUST_LOG ──► tracing (stderr)                                          │
//! │  QUICKMART_* ──► CliConfig ──► CheckoutPolicy                           │
//! │                                                                         │
//! │  seed() ──► checkout() ──┬── Ok  ──► notice + receipt ──► stdout        │
//! │                          └── Err ──► "Checkout failed: .." ──► stderr   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed checkout is a business outcome, not a crash: the process still
//! exits with status 0. Only bad configuration makes it exit non-zero.

mod config;
mod store;

use tracing::info;
use tracing_subscriber::EnvFilter;

use quickmart_core::{checkout, CheckoutOutcome};

use crate::config::{CliConfig, OutputFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the receipt.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = CliConfig::load()?;
    info!(
        shipping_fee_cents = config.shipping_fee_cents,
        output = ?config.output,
        "Configuration loaded"
    );

    let policy = config.policy();
    let result = store::seed().and_then(|mut store| {
        checkout(&mut store.customer, &store.cart, &mut store.inventory, &policy)
    });

    match result {
        Ok(outcome) => print!("{}", render(&outcome, config.output)?),
        Err(e) => eprintln!("Checkout failed: {e}"),
    }

    Ok(())
}

/// Renders the outcome for stdout.
fn render(outcome: &CheckoutOutcome, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            if let Some(shipment) = &outcome.shipment {
                out.push_str(&shipment.to_string());
            }
            out.push_str(&outcome.receipt.to_string());
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(outcome)?;
            out.push('\n');
            Ok(out)
        }
    }
}
