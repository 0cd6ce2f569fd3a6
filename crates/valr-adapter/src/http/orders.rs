/*
[INPUT]:  Order requests with body signature headers
[OUTPUT]: Order ids, open orders, history and status
[POS]:    HTTP layer - exchange order endpoints (require auth)
[UPDATE]: When adding new order endpoints or changing order flow
*/

use reqwest::Method;

use crate::http::{Result, ValrClient};
use crate::types::{
    CancelOrderRequest, LimitOrderRequest, MarketOrderRequest, OpenOrder, OrderHistoryRecord,
    OrderPlacedResponse, OrderStatus,
};

impl ValrClient {
    /// Place a limit order
    ///
    /// POST /v1/orders/limit
    pub async fn place_limit_order(
        &self,
        request: &LimitOrderRequest,
    ) -> Result<OrderPlacedResponse> {
        let body = serde_json::to_string(request)?;
        let builder = self.signed_request(Method::POST, "/v1/orders/limit", Some(body))?;
        self.send_json(builder).await
    }

    /// Place a market order
    ///
    /// POST /v1/orders/market
    pub async fn place_market_order(
        &self,
        request: &MarketOrderRequest,
    ) -> Result<OrderPlacedResponse> {
        let body = serde_json::to_string(request)?;
        let builder = self.signed_request(Method::POST, "/v1/orders/market", Some(body))?;
        self.send_json(builder).await
    }

    /// List all open orders
    ///
    /// GET /v1/orders/open
    pub async fn get_open_orders(&self) -> Result<Vec<OpenOrder>> {
        let builder = self.signed_request(Method::GET, "/v1/orders/open", None)?;
        self.send_json(builder).await
    }

    /// Get the order history
    ///
    /// GET /v1/orders/history?skip={skip}&limit={limit}
    pub async fn get_order_history(&self, skip: u32, limit: u32) -> Result<Vec<OrderHistoryRecord>> {
        let endpoint = format!("/v1/orders/history?skip={}&limit={}", skip, limit);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Summary of a completed order, by exchange order id
    ///
    /// GET /v1/orders/history/summary/order/orderid/{orderId}
    pub async fn get_order_summary_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<OrderHistoryRecord> {
        let endpoint = format!("/v1/orders/history/summary/order/orderid/{}", order_id);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Summary of a completed order, by customer order id
    ///
    /// GET /v1/orders/history/summary/order/customerorderid/{customerOrderId}
    pub async fn get_order_summary_by_customer_order_id(
        &self,
        customer_order_id: &str,
    ) -> Result<OrderHistoryRecord> {
        let endpoint = format!(
            "/v1/orders/history/summary/order/customerorderid/{}",
            customer_order_id
        );
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Every state transition of an order, by exchange order id
    ///
    /// GET /v1/orders/history/details/order/orderid/{orderId}
    pub async fn get_order_details_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Vec<OrderHistoryRecord>> {
        let endpoint = format!("/v1/orders/history/details/order/orderid/{}", order_id);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Every state transition of an order, by customer order id
    ///
    /// GET /v1/orders/history/details/order/customerorderid/{customerOrderId}
    pub async fn get_order_details_by_customer_order_id(
        &self,
        customer_order_id: &str,
    ) -> Result<Vec<OrderHistoryRecord>> {
        let endpoint = format!(
            "/v1/orders/history/details/order/customerorderid/{}",
            customer_order_id
        );
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Cancel an open order.
    ///
    /// DELETE /v1/orders/order
    /// The server replies 202 Accepted; the outcome arrives on the account
    /// WebSocket stream or via order status polling.
    pub async fn cancel_order(&self, request: &CancelOrderRequest) -> Result<()> {
        let body = serde_json::to_string(request)?;
        let builder = self.signed_request(Method::DELETE, "/v1/orders/order", Some(body))?;
        self.send_no_content(builder).await
    }

    /// Status of an order on the given pair, by exchange order id
    ///
    /// GET /v1/orders/{pair}/orderid/{orderId}
    pub async fn get_order_status_by_order_id(
        &self,
        pair: &str,
        order_id: &str,
    ) -> Result<OrderStatus> {
        let endpoint = format!("/v1/orders/{}/orderid/{}", pair, order_id);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Status of an order on the given pair, by customer order id
    ///
    /// GET /v1/orders/{pair}/order/customerorderid/{customerOrderId}
    pub async fn get_order_status_by_customer_order_id(
        &self,
        pair: &str,
        customer_order_id: &str,
    ) -> Result<OrderStatus> {
        let endpoint = format!("/v1/orders/{}/order/customerorderid/{}", pair, customer_order_id);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, ValrClient, ValrError};
    use crate::types::{CancelOrderRequest, LimitOrderRequest, Side};
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn authed_client(base_url: &str) -> ValrClient {
        let mut client = ValrClient::with_config_and_base_url(ClientConfig::default(), base_url)
            .expect("client init");
        client.set_credentials(Credentials::new("test-key", "test-secret"));
        client
    }

    #[tokio::test]
    async fn test_place_limit_order() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/v1/orders/limit"))
            .and(header_exists("X-VALR-SIGNATURE"))
            .and(body_json(serde_json::json!({
                "pair": "BTCZAR",
                "side": "SELL",
                "quantity": "0.1",
                "price": "1200000",
                "postOnly": true,
            })))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"id": "558f5e0a-ffd1-46dd-8fae-763d93fa2f25"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client(&server.uri());
        let mut request = LimitOrderRequest::new(
            "BTCZAR",
            Side::Sell,
            "0.1".parse().expect("quantity"),
            "1200000".parse().expect("price"),
        );
        request.post_only = true;

        let placed = client
            .place_limit_order(&request)
            .await
            .expect("place_limit_order failed");

        assert_eq!(placed.id, "558f5e0a-ffd1-46dd-8fae-763d93fa2f25");
    }

    #[tokio::test]
    async fn test_cancel_order_accepts_empty_body() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/v1/orders/order"))
            .and(body_json(serde_json::json!({
                "pair": "BTCZAR",
                "orderId": "558f5e0a-ffd1-46dd-8fae-763d93fa2f25",
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client(&server.uri());
        let request =
            CancelOrderRequest::by_order_id("BTCZAR", "558f5e0a-ffd1-46dd-8fae-763d93fa2f25");

        client.cancel_order(&request).await.expect("cancel_order failed");
    }

    #[tokio::test]
    async fn test_api_error_body_is_surfaced() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/orders/open"))
            .respond_with(
                ResponseTemplate::new(400)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"code": -105, "message": "Invalid currency pair"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = authed_client(&server.uri());
        let err = client.get_open_orders().await.expect_err("should surface API error");

        match err {
            ValrError::Api { code, message } => {
                assert_eq!(code, -105);
                assert_eq!(message, "Invalid currency pair");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }
}
