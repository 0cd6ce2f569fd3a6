/*
[INPUT]:  Authenticated client and order parameters
[OUTPUT]: Order creation/cancellation confirmations
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use valr_adapter::*;

/// Example: Trading operations (requires VALR_API_KEY / VALR_API_SECRET)
///
/// Places a deliberately far-from-market post-only limit order, looks it up
/// among the open orders, then cancels it again.
#[tokio::main]
async fn main() {
    println!("=== VALR Trading Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load credentials: {}", e);
            eprintln!("Set VALR_API_KEY and VALR_API_SECRET to run this example");
            return;
        }
    };

    let mut client = match ValrClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    client.set_credentials(credentials);
    println!("✓ Authenticated HTTP client created\n");

    // Balances
    println!("Querying balances...");
    match client.get_balances().await {
        Ok(balances) => {
            println!("✓ {} balances", balances.len());
            for balance in balances.iter().filter(|b| !b.total.is_zero()) {
                println!(
                    "  {}: available {} reserved {}",
                    balance.currency, balance.available, balance.reserved
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    // Place a post-only limit sell, far above the market
    let pair = "BTCZAR";
    let mut request = LimitOrderRequest::new(
        pair,
        Side::Sell,
        "0.0001".parse().expect("quantity"),
        "9999999".parse().expect("price"),
    )
    .with_generated_customer_order_id();
    request.post_only = true;

    println!("\nPlacing limit order on {}...", pair);
    let order_id = match client.place_limit_order(&request).await {
        Ok(placed) => {
            println!("✓ Order accepted: {}", placed.id);
            Some(placed.id)
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            None
        }
    };

    // Show open orders
    println!("\nQuerying open orders...");
    match client.get_open_orders().await {
        Ok(orders) => {
            println!("✓ {} open orders", orders.len());
            for order in &orders {
                println!(
                    "  {} {:?} {} @ {} ({})",
                    order.currency_pair, order.side, order.remaining_quantity, order.price,
                    order.order_id
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    // Cancel the order we just placed
    if let Some(order_id) = order_id {
        println!("\nCancelling order {}...", order_id);
        let cancel = CancelOrderRequest::by_order_id(pair, order_id);
        match client.cancel_order(&cancel).await {
            Ok(()) => println!("✓ Cancel accepted"),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Trading example complete");
}
