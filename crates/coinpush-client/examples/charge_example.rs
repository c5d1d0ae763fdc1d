/*
[INPUT]:  Fiat currency, charge amount, and payer details
[OUTPUT]: Hosted charge token and checkout view
[POS]:    Examples - fiat conversion and hosted charge flow
[UPDATE]: When adding new rate or charge endpoints
*/

use coinpush_client::*;
use rust_decimal::Decimal;
use serde_json::{json, Map};

/// Example: Convert a fiat amount, open a hosted charge, and view it
#[tokio::main]
async fn main() {
    println!("=== Coinpush Charge Example ===\n");

    let client = match CoinpushClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    // How much BTC does 25.50 EUR buy right now?
    let amount: Decimal = match "25.50".parse() {
        Ok(amount) => amount,
        Err(e) => {
            eprintln!("Failed to parse amount: {}", e);
            return;
        }
    };
    println!("Converting {} EUR to BTC...", amount);
    match client.convert("eur", amount, "btc").await {
        Ok(response) => println!("✓ Conversion: {}", response["results"]),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Open a hosted charge the payer completes on the checkout page.
    let mut params = Map::new();
    params.insert("amount".to_string(), json!("25.50"));
    params.insert("email".to_string(), json!("payer@example.com"));

    println!("\nOpening a hosted EUR charge...");
    match client.charge("eur", params).await {
        Ok(response) => {
            println!("✓ Charge opened: {}", response["results"]);

            if let Some(token) = response["results"]["token"].as_str() {
                println!("\nFetching checkout view for {}...", token);
                match client.charge_view(token).await {
                    Ok(view) => println!("✓ Checkout view: {}", view["results"]),
                    Err(e) => match e.status_code() {
                        Some(status) => {
                            println!("✗ Lookup rejected ({}): {:?}", status, e.response())
                        }
                        None => println!("✗ Error: {}", e),
                    },
                }
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Charge example complete");
}
