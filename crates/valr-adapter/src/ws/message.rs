/*
[INPUT]:  Raw WebSocket message text
[OUTPUT]: Parsed StreamMessage values and subscription vocabulary
[POS]:    WebSocket layer - message parsing and validation
[UPDATE]: When adding new message types or changing format
*/

use serde::{Deserialize, Serialize};

/// Events available on the /ws/trade stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeEvent {
    AggregatedOrderbookUpdate,
    MarketSummaryUpdate,
    NewTradeBucket,
    NewTrade,
}

impl TradeEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeEvent::AggregatedOrderbookUpdate => "AGGREGATED_ORDERBOOK_UPDATE",
            TradeEvent::MarketSummaryUpdate => "MARKET_SUMMARY_UPDATE",
            TradeEvent::NewTradeBucket => "NEW_TRADE_BUCKET",
            TradeEvent::NewTrade => "NEW_TRADE",
        }
    }
}

/// One aggregated price level in a streamed orderbook update.
///
/// Stream payloads keep amounts as strings; consumers needing arithmetic
/// parse into `Decimal` at the edge.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookLevel {
    pub side: String,
    pub quantity: String,
    pub price: String,
    pub currency_pair: String,
    pub order_count: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderbookUpdateData {
    #[serde(rename = "Asks")]
    pub asks: Vec<OrderbookLevel>,
    #[serde(rename = "Bids")]
    pub bids: Vec<OrderbookLevel>,
    #[serde(rename = "LastChange", default)]
    pub last_change: Option<i64>,
    #[serde(rename = "SequenceNumber", default)]
    pub sequence_number: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummaryData {
    pub currency_pair: String,
    pub ask_price: String,
    pub bid_price: String,
    pub last_traded_price: String,
    pub previous_close_price: String,
    pub base_volume: String,
    pub high_price: String,
    pub low_price: String,
    pub created: String,
    pub change_from_previous: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeData {
    pub price: String,
    pub quantity: String,
    pub currency_pair: String,
    pub traded_at: String,
    pub taker_side: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeBucketData {
    pub currency_pair_symbol: String,
    pub bucket_period_in_seconds: u32,
    pub start_time: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

/// Messages received on the VALR WebSocket streams.
///
/// Market data payloads are typed; account stream payloads vary by event and
/// are passed through as raw JSON.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum StreamMessage {
    #[serde(rename = "AUTHENTICATED")]
    Authenticated,
    #[serde(rename = "PONG")]
    Pong,
    #[serde(rename = "AGGREGATED_ORDERBOOK_UPDATE")]
    AggregatedOrderbookUpdate {
        #[serde(rename = "currencyPairSymbol")]
        currency_pair_symbol: String,
        data: OrderbookUpdateData,
    },
    #[serde(rename = "MARKET_SUMMARY_UPDATE")]
    MarketSummaryUpdate {
        #[serde(rename = "currencyPairSymbol")]
        currency_pair_symbol: String,
        data: MarketSummaryData,
    },
    #[serde(rename = "NEW_TRADE")]
    NewTrade {
        #[serde(rename = "currencyPairSymbol")]
        currency_pair_symbol: String,
        data: TradeData,
    },
    #[serde(rename = "NEW_TRADE_BUCKET")]
    NewTradeBucket {
        #[serde(rename = "currencyPairSymbol")]
        currency_pair_symbol: String,
        data: TradeBucketData,
    },
    #[serde(rename = "BALANCE_UPDATE")]
    BalanceUpdate { data: serde_json::Value },
    #[serde(rename = "OPEN_ORDERS_UPDATE")]
    OpenOrdersUpdate { data: serde_json::Value },
    #[serde(rename = "ORDER_STATUS_UPDATE")]
    OrderStatusUpdate { data: serde_json::Value },
    #[serde(rename = "ORDER_PROCESSED")]
    OrderProcessed { data: serde_json::Value },
    #[serde(rename = "NEW_ACCOUNT_TRADE")]
    NewAccountTrade { data: serde_json::Value },
    #[serde(other)]
    Other,
}
