/*
[INPUT]:  Currency pair identifiers
[OUTPUT]: Market data (time, summaries, pairs, currencies, orderbook)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{Result, ValrClient};
use crate::types::{
    Currency, CurrencyPair, MarketSummary, OrderBook, PairOrderTypes, ServerTime,
};

impl ValrClient {
    /// Get the server time
    ///
    /// GET /v1/public/time
    pub async fn get_server_time(&self) -> Result<ServerTime> {
        let builder = self.get_request("/v1/public/time")?;
        self.send_json(builder).await
    }

    /// Get market summaries for all currency pairs
    ///
    /// GET /v1/public/marketsummary
    pub async fn get_market_summaries(&self) -> Result<Vec<MarketSummary>> {
        let builder = self.get_request("/v1/public/marketsummary")?;
        self.send_json(builder).await
    }

    /// Get the market summary for one currency pair
    ///
    /// GET /v1/public/{pair}/marketsummary
    pub async fn get_market_summary(&self, pair: &str) -> Result<MarketSummary> {
        let endpoint = format!("/v1/public/{}/marketsummary", pair);
        let builder = self.get_request(&endpoint)?;
        self.send_json(builder).await
    }

    /// List all supported currency pairs
    ///
    /// GET /v1/public/pairs
    pub async fn get_currency_pairs(&self) -> Result<Vec<CurrencyPair>> {
        let builder = self.get_request("/v1/public/pairs")?;
        self.send_json(builder).await
    }

    /// List all supported currencies
    ///
    /// GET /v1/public/currencies
    pub async fn get_currencies(&self) -> Result<Vec<Currency>> {
        let builder = self.get_request("/v1/public/currencies")?;
        self.send_json(builder).await
    }

    /// List supported order types for every currency pair
    ///
    /// GET /v1/public/ordertypes
    pub async fn get_order_types(&self) -> Result<Vec<PairOrderTypes>> {
        let builder = self.get_request("/v1/public/ordertypes")?;
        self.send_json(builder).await
    }

    /// List supported order types for one currency pair
    ///
    /// GET /v1/public/{pair}/ordertypes
    pub async fn get_order_types_for_pair(&self, pair: &str) -> Result<PairOrderTypes> {
        let endpoint = format!("/v1/public/{}/ordertypes", pair);
        let builder = self.get_request(&endpoint)?;
        self.send_json(builder).await
    }

    /// Get the aggregated orderbook for a currency pair
    ///
    /// GET /v1/public/{pair}/orderbook
    pub async fn get_order_book(&self, pair: &str) -> Result<OrderBook> {
        let endpoint = format!("/v1/public/{}/orderbook", pair);
        let builder = self.get_request(&endpoint)?;
        self.send_json(builder).await
    }
}
