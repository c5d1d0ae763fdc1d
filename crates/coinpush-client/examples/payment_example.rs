/*
[INPUT]:  Crypto currency, amount in base units, and payout address
[OUTPUT]: Created payment details (deposit address, status history)
[POS]:    Examples - payment creation and follow-up lookups
[UPDATE]: When adding new payment endpoints
*/

use coinpush_client::*;
use serde_json::{json, Map};

/// Example: Create a payment and look up its address and status history
#[tokio::main]
async fn main() {
    println!("=== Coinpush Payment Example ===\n");

    let client = match CoinpushClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", client.config().base_url());

    // Create a BTC payment; the amount is in the smallest currency unit.
    let mut params = Map::new();
    params.insert("amount".to_string(), json!(200_000));
    params.insert(
        "output_address".to_string(),
        json!("142ZaKhcv68Yepqqu5TuQ88kLbBVxcVeRW"),
    );

    println!("Creating BTC payment...");
    match client.create("btc", params).await {
        Ok(response) => {
            println!("✓ Payment created: {}", response["results"]);

            if let Some(label) = response["results"]["label"].as_str() {
                println!("\nLooking up deposit address for {}...", label);
                match client.address(label).await {
                    Ok(address) => println!("✓ Address: {}", address["results"]),
                    Err(e) => println!("✗ Error: {}", e),
                }

                println!("\nListing status history for {}...", label);
                match client.statuses(label).await {
                    Ok(statuses) => println!("✓ Statuses: {}", statuses["results"]),
                    Err(e) => println!("✗ Error: {}", e),
                }
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Payment example complete");
}
