/*
[INPUT]:  Currency pair identifier (e.g., "BTCZAR")
[OUTPUT]: Market data (server time, summary, orderbook)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use valr_adapter::*;

/// Example: Query market data (no authentication required)
///
/// These endpoints are public; with credentials set the same calls are
/// signed and count against the authenticated rate limits.
#[tokio::main]
async fn main() {
    println!("=== VALR Market Data Example ===\n");

    let client = match ValrClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let pair = "BTCZAR";

    // Server time
    println!("Querying server time...");
    match client.get_server_time().await {
        Ok(time) => println!("✓ Server time: {} ({})", time.time, time.epoch_time),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Market summary for one pair
    println!("\nQuerying market summary for {}...", pair);
    match client.get_market_summary(pair).await {
        Ok(summary) => println!(
            "✓ {}: last {} bid {} ask {}",
            summary.currency_pair, summary.last_traded_price, summary.bid_price, summary.ask_price
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Aggregated orderbook
    println!("\nQuerying orderbook for {}...", pair);
    match client.get_order_book(pair).await {
        Ok(book) => {
            println!("✓ Orderbook: {} asks, {} bids", book.asks.len(), book.bids.len());
            if let Some(best_ask) = book.asks.first() {
                println!("  best ask: {} x {}", best_ask.price, best_ask.quantity);
            }
            if let Some(best_bid) = book.bids.first() {
                println!("  best bid: {} x {}", best_bid.price, best_bid.quantity);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    // Supported pairs
    println!("\nQuerying currency pairs...");
    match client.get_currency_pairs().await {
        Ok(pairs) => println!("✓ {} currency pairs supported", pairs.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
