/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Side, TimeInForce};

/// POST /v1/orders/limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    pub pair: String,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub post_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

impl LimitOrderRequest {
    pub fn new(pair: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            pair: pair.into(),
            side,
            quantity,
            price,
            post_only: false,
            customer_order_id: None,
            time_in_force: None,
        }
    }

    /// Tag the order with a caller-chosen customer order id
    pub fn with_customer_order_id(mut self, customer_order_id: impl Into<String>) -> Self {
        self.customer_order_id = Some(customer_order_id.into());
        self
    }

    /// Tag the order with a generated customer order id.
    ///
    /// VALR limits customer order ids to 50 alphanumeric characters, so the
    /// uuid is rendered without hyphens.
    pub fn with_generated_customer_order_id(mut self) -> Self {
        self.customer_order_id = Some(Uuid::new_v4().simple().to_string());
        self
    }
}

/// POST /v1/orders/market.
///
/// A market BUY spends `quoteAmount`; a market SELL disposes of
/// `baseAmount`. Use the constructors to keep the pairing straight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    pub pair: String,
    pub side: Side,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
}

impl MarketOrderRequest {
    /// Market buy: spend `quote_amount` of the quote currency
    pub fn buy(pair: impl Into<String>, quote_amount: Decimal) -> Self {
        Self {
            pair: pair.into(),
            side: Side::Buy,
            quote_amount: Some(quote_amount),
            base_amount: None,
            customer_order_id: None,
        }
    }

    /// Market sell: dispose of `base_amount` of the base currency
    pub fn sell(pair: impl Into<String>, base_amount: Decimal) -> Self {
        Self {
            pair: pair.into(),
            side: Side::Sell,
            quote_amount: None,
            base_amount: Some(base_amount),
            customer_order_id: None,
        }
    }
}

/// DELETE /v1/orders/order. Exactly one of the ids must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub pair: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
}

impl CancelOrderRequest {
    pub fn by_order_id(pair: impl Into<String>, order_id: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            order_id: Some(order_id.into()),
            customer_order_id: None,
        }
    }

    pub fn by_customer_order_id(
        pair: impl Into<String>,
        customer_order_id: impl Into<String>,
    ) -> Self {
        Self {
            pair: pair.into(),
            order_id: None,
            customer_order_id: Some(customer_order_id.into()),
        }
    }
}

/// POST /v1/simple/{pair}/quote and /v1/simple/{pair}/order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOrderRequest {
    pub pay_in_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub pay_amount: Decimal,
    pub side: Side,
}

/// POST /v1/wallet/crypto/{currency}/withdraw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoWithdrawalRequest {
    pub address: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
}

/// POST /v1/wallet/fiat/{currency}/withdraw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiatWithdrawalRequest {
    pub linked_bank_account_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_buy_serializes_quote_amount_only() {
        let request = MarketOrderRequest::buy("BTCZAR", "5000".parse().expect("amount"));
        let value = serde_json::to_value(&request).expect("serialize");

        assert_eq!(value["side"], "BUY");
        assert_eq!(value["quoteAmount"], "5000");
        assert!(value.get("baseAmount").is_none());
    }

    #[test]
    fn limit_order_omits_unset_optionals() {
        let request = LimitOrderRequest::new(
            "BTCZAR",
            Side::Sell,
            "0.1".parse().expect("quantity"),
            "1200000".parse().expect("price"),
        );
        let value = serde_json::to_value(&request).expect("serialize");

        assert_eq!(value["postOnly"], false);
        assert!(value.get("customerOrderId").is_none());
        assert!(value.get("timeInForce").is_none());
    }
}
