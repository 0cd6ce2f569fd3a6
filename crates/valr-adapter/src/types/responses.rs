/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returned by POST /v1/orders/limit, /v1/orders/market and
/// /v1/simple/{pair}/order: the order id to poll status with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlacedResponse {
    pub id: String,
}

/// Returned by the withdrawal POST endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalQueuedResponse {
    pub id: String,
}

/// POST /v1/simple/{pair}/quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleQuoteResponse {
    pub currency_pair: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub pay_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub receive_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
    pub fee_currency: String,
    pub created_at: String,
    pub id: String,
}
