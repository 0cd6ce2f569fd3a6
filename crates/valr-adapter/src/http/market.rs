/*
[INPUT]:  Currency pair identifiers and signed request headers
[OUTPUT]: Authenticated market data views (full orderbook, trade history)
[POS]:    HTTP layer - market data endpoints (require auth)
[UPDATE]: When adding new market data endpoints
*/

use reqwest::Method;

use crate::http::{Result, ValrClient};
use crate::types::{OrderBook, TradeRecord};

impl ValrClient {
    /// Get the authenticated orderbook view for a currency pair
    ///
    /// GET /v1/marketdata/{pair}/orderbook
    pub async fn get_market_order_book(&self, pair: &str) -> Result<OrderBook> {
        let endpoint = format!("/v1/marketdata/{}/orderbook", pair);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Get recent trades for a currency pair
    ///
    /// GET /v1/marketdata/{pair}/tradehistory?limit={limit}
    pub async fn get_market_trade_history(
        &self,
        pair: &str,
        limit: u32,
    ) -> Result<Vec<TradeRecord>> {
        let endpoint = format!("/v1/marketdata/{}/tradehistory?limit={}", pair, limit);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, ValrClient};
    use crate::types::TakerSide;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_market_trade_history() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {
                "price": "9000",
                "quantity": "0.00993",
                "currencyPair": "BTCZAR",
                "tradedAt": "2019-04-20T13:02:03.228Z",
                "takerSide": "buy",
                "sequenceId": 1555765323228000001
            }
        ]"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/marketdata/BTCZAR/tradehistory"))
            .and(query_param("limit", "10"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut client = ValrClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");
        client.set_credentials(Credentials::new("test-key", "test-secret"));

        let trades = client
            .get_market_trade_history("BTCZAR", 10)
            .await
            .expect("get_market_trade_history failed");

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].taker_side, TakerSide::Buy);
        assert_eq!(trades[0].price, "9000".parse().expect("price"));
    }
}
