/*
[INPUT]:  Query parameters and signed request headers
[OUTPUT]: Account data (balances, transaction and trade history)
[POS]:    HTTP layer - account endpoints (require auth)
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{Result, ValrClient};
use crate::types::{Balance, TradeRecord, TransactionRecord};

impl ValrClient {
    /// Get balances for all currencies
    ///
    /// GET /v1/account/balances
    pub async fn get_balances(&self) -> Result<Vec<Balance>> {
        let builder = self.signed_request(Method::GET, "/v1/account/balances", None)?;
        self.send_json(builder).await
    }

    /// Get the account transaction history
    ///
    /// GET /v1/account/transactionhistory?skip={skip}&limit={limit}
    pub async fn get_transaction_history(
        &self,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<TransactionRecord>> {
        let endpoint = format!("/v1/account/transactionhistory?skip={}&limit={}", skip, limit);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Get this account's trades for a currency pair
    ///
    /// GET /v1/account/{pair}/tradehistory?limit={limit}
    pub async fn get_account_trade_history(
        &self,
        pair: &str,
        limit: u32,
    ) -> Result<Vec<TradeRecord>> {
        let endpoint = format!("/v1/account/{}/tradehistory?limit={}", pair, limit);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, ValrClient, ValrError};
    use wiremock::matchers::{header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn authed_client(base_url: &str) -> ValrClient {
        let mut client = ValrClient::with_config_and_base_url(ClientConfig::default(), base_url)
            .expect("client init");
        client.set_credentials(Credentials::new("test-key", "test-secret"));
        client
    }

    #[tokio::test]
    async fn test_get_balances_sends_signed_headers() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {"currency": "BTC", "available": "0.1", "reserved": "0.01", "total": "0.11"},
            {"currency": "ZAR", "available": "1000", "reserved": "0", "total": "1000"}
        ]"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/account/balances"))
            .and(header_exists("X-VALR-API-KEY"))
            .and(header_exists("X-VALR-SIGNATURE"))
            .and(header_exists("X-VALR-TIMESTAMP"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client(&server.uri());
        let balances = client.get_balances().await.expect("get_balances failed");

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].currency, "BTC");
        assert_eq!(balances[1].total, "1000".parse().expect("total"));
    }

    #[tokio::test]
    async fn test_get_balances_requires_credentials() {
        let client = ValrClient::new().expect("client init");
        let err = client.get_balances().await.expect_err("should fail without credentials");
        assert!(matches!(err, ValrError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_transaction_history_query_params() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/account/transactionhistory"))
            .and(query_param("skip", "5"))
            .and(query_param("limit", "20"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw("[]", "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client(&server.uri());
        let records = client
            .get_transaction_history(5, 20)
            .await
            .expect("get_transaction_history failed");

        assert!(records.is_empty());
    }
}
