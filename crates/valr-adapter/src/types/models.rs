/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
[UPDATE]: 2026-08-07 tolerate missing LastChange on public orderbook snapshots
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Side, TakerSide};

/// GET /v1/public/time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    pub epoch_time: i64,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub currency_pair: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub ask_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bid_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub last_traded_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub previous_close_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_volume: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low_price: Decimal,
    pub created: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub change_from_previous: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPair {
    pub symbol: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub short_name: String,
    pub active: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_base_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_base_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_quote_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_quote_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub symbol: String,
    pub is_active: bool,
    pub short_name: String,
    pub long_name: String,
}

/// Supported order types for one pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairOrderTypes {
    pub currency_pair: String,
    pub order_types: Vec<String>,
}

/// One aggregated price level.
///
/// The orderbook endpoints use uppercase `Asks`/`Bids` keys but camelCase
/// level fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookEntry {
    pub side: TakerSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub currency_pair: String,
    pub order_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(rename = "Asks")]
    pub asks: Vec<OrderBookEntry>,
    #[serde(rename = "Bids")]
    pub bids: Vec<OrderBookEntry>,
    #[serde(rename = "LastChange", default)]
    pub last_change: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub available: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub reserved: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionType {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// One row of /v1/account/transactionhistory.
///
/// Debit/credit/fee legs are all optional; which ones appear depends on the
/// transaction type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit_currency: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_currency: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_currency: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<serde_json::Value>,
    pub event_at: String,
}

/// One executed trade from the trade history endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    pub currency_pair: String,
    pub traded_at: String,
    pub taker_side: TakerSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAddress {
    pub currency: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalInfo {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub minimum_withdraw_amount: Decimal,
    pub is_active: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub withdraw_cost: Decimal,
    pub supports_payment_reference: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalStatus {
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fee_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    pub confirmations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_confirmation_at: Option<String>,
    pub unique_id: String,
    pub created_at: String,
    pub verified: bool,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    pub currency_code: String,
    pub receive_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub created_at: String,
    pub confirmations: u32,
    pub confirmed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub bank: String,
    pub account_holder: String,
    pub account_number: String,
    pub branch_code: String,
    pub account_type: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrder {
    pub order_id: String,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::str")]
    pub remaining_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub currency_pair: String,
    pub created_at: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub original_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub filled_percentage: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
}

/// Order history rows, summaries and detail events share this shape; the
/// optional fields are absent on the sparser variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryRecord {
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
    pub order_status_type: String,
    pub currency_pair: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub original_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub remaining_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub original_quantity: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_currency: Option<String>,
    pub order_side: Side,
    pub order_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
    pub order_updated_at: String,
    pub order_created_at: String,
}

/// GET /v1/orders/{pair}/orderid/{orderId}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub order_id: String,
    pub order_status_type: String,
    pub currency_pair: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub original_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub remaining_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub original_quantity: Decimal,
    pub order_side: Side,
    pub order_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_reason: Option<String>,
    pub order_updated_at: String,
    pub order_created_at: String,
}

/// GET /v1/simple/{pair}/order/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOrderStatus {
    pub order_id: String,
    pub success: bool,
    pub processing: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub paid_amount: Decimal,
    pub paid_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub received_amount: Decimal,
    pub received_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub fee_amount: Decimal,
    pub fee_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_executed_at: Option<String>,
}
