/*
[INPUT]:  WebSocket path and API credentials
[OUTPUT]: Real-time market/account updates
[POS]:    Examples - WebSocket stream handling
[UPDATE]: When WebSocket API changes
*/

use tokio::time::{Duration, sleep};
use valr_adapter::*;

/// Example: WebSocket real-time data streams
///
/// VALR provides two WebSocket endpoints:
/// 1. /ws/trade: orderbook, market summary and trade events per pair
/// 2. /ws/account: balance and order lifecycle events for the account
///
/// Both are authenticated with the same signed headers as REST. The server
/// sends AUTHENTICATED on every (re)connect; subscribe when it arrives so
/// subscriptions survive reconnects.
#[tokio::main]
async fn main() {
    println!("=== VALR WebSocket Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load credentials: {}", e);
            eprintln!("Set VALR_API_KEY and VALR_API_SECRET to run this example");
            return;
        }
    };

    let mut ws = ValrWebSocket::new(credentials, WsPath::Trade);
    let mut receiver = ws.take_receiver().expect("receiver already taken");
    println!("✓ WebSocket client created");

    ws.connect();
    println!("✓ Connecting to {}...\n", WsPath::Trade.as_str());

    let consumer = tokio::spawn(async move {
        while let Some(message) = receiver.recv().await {
            match message {
                StreamMessage::Authenticated => {
                    println!("AUTHENTICATED, subscribing to BTCZAR orderbook...");
                    if let Err(e) = ws
                        .subscribe(TradeEvent::AggregatedOrderbookUpdate, &["BTCZAR"])
                        .await
                    {
                        println!("✗ Subscribe failed: {}", e);
                    }
                }
                StreamMessage::AggregatedOrderbookUpdate {
                    currency_pair_symbol,
                    data,
                } => {
                    println!(
                        "{}: {} asks / {} bids (seq {:?})",
                        currency_pair_symbol,
                        data.asks.len(),
                        data.bids.len(),
                        data.sequence_number
                    );
                }
                StreamMessage::NewTrade {
                    currency_pair_symbol,
                    data,
                } => {
                    println!(
                        "{}: trade {} x {} ({})",
                        currency_pair_symbol, data.price, data.quantity, data.taker_side
                    );
                }
                StreamMessage::Pong => {}
                other => println!("message: {:?}", other),
            }
        }
    });

    // Let the stream run for a while, then drop everything
    sleep(Duration::from_secs(30)).await;
    consumer.abort();

    println!("\n✓ WebSocket example complete");
}
