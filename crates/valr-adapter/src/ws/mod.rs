/*
[INPUT]:  WebSocket configuration and subscription events
[OUTPUT]: Real-time market and account data streams
[POS]:    WebSocket layer - real-time data streams
[UPDATE]: When adding new events or changing connection logic
*/

pub mod client;
pub mod message;

pub use client::{ValrWebSocket, WsConfig, WsPath};
pub use message::{
    MarketSummaryData, OrderbookLevel, OrderbookUpdateData, StreamMessage, TradeBucketData,
    TradeData, TradeEvent,
};
