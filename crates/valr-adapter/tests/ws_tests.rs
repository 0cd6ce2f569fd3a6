/*
[INPUT]:  WebSocket test scenarios
[OUTPUT]: Test results for WebSocket client
[POS]:    Integration tests - WebSocket
[UPDATE]: When WebSocket client changes
*/

mod common;

use common::test_credentials;
use std::time::Duration;
use valr_adapter::{StreamMessage, TradeEvent, ValrError, ValrWebSocket, WsConfig, WsPath};

#[test]
fn test_websocket_creation() {
    let mut ws = ValrWebSocket::new(test_credentials(), WsPath::Trade);
    assert!(ws.take_receiver().is_some());
}

#[test]
fn test_websocket_receiver_take_once() {
    let mut ws = ValrWebSocket::new(test_credentials(), WsPath::Account);
    assert!(ws.take_receiver().is_some());
    assert!(ws.take_receiver().is_none());
}

#[test]
fn test_websocket_custom_config() {
    let config = WsConfig {
        base_url: "wss://staging.valr.com".to_string(),
        reconnect_interval: Duration::from_secs(3),
        ping_interval: Duration::from_secs(15),
    };
    let mut ws = ValrWebSocket::with_config(test_credentials(), WsPath::Trade, config);
    assert!(ws.take_receiver().is_some());
}

#[tokio::test]
async fn test_subscribe_requires_connection() {
    let ws = ValrWebSocket::new(test_credentials(), WsPath::Trade);

    let err = ws
        .subscribe(TradeEvent::AggregatedOrderbookUpdate, &["BTCZAR"])
        .await
        .expect_err("subscribe should fail while disconnected");
    assert!(matches!(err, ValrError::NotConnected));

    let err = ws
        .unsubscribe(TradeEvent::NewTrade)
        .await
        .expect_err("unsubscribe should fail while disconnected");
    assert!(matches!(err, ValrError::NotConnected));
}

#[test]
fn test_market_summary_update_parses() {
    let raw = r#"{
        "type": "MARKET_SUMMARY_UPDATE",
        "currencyPairSymbol": "BTCZAR",
        "data": {
            "currencyPair": "BTCZAR",
            "askPrice": "9500",
            "bidPrice": "9400",
            "lastTradedPrice": "9500",
            "previousClosePrice": "9410",
            "baseVolume": "0.161",
            "highPrice": "10000",
            "lowPrice": "9400",
            "created": "2019-04-20T13:02:03.228Z",
            "changeFromPrevious": "0.96"
        }
    }"#;

    let message: StreamMessage = serde_json::from_str(raw).expect("message should parse");
    match message {
        StreamMessage::MarketSummaryUpdate { data, .. } => {
            assert_eq!(data.last_traded_price, "9500");
        }
        other => panic!("Expected market summary update, got {other:?}"),
    }
}

#[test]
fn test_account_event_payload_passthrough() {
    let raw = r#"{
        "type": "BALANCE_UPDATE",
        "data": {
            "currency": {"symbol": "BTC"},
            "available": "0.5",
            "reserved": "0.1",
            "total": "0.6"
        }
    }"#;

    let message: StreamMessage = serde_json::from_str(raw).expect("message should parse");
    match message {
        StreamMessage::BalanceUpdate { data } => {
            assert_eq!(data["available"], "0.5");
        }
        other => panic!("Expected balance update, got {other:?}"),
    }
}
