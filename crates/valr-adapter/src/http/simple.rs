/*
[INPUT]:  Simple buy/sell requests with body signature headers
[OUTPUT]: Quotes, queued simple orders and their status
[POS]:    HTTP layer - simple buy/sell endpoints (require auth)
[UPDATE]: When the simple order flow changes
*/

use reqwest::Method;

use crate::http::{Result, ValrClient};
use crate::types::{OrderPlacedResponse, SimpleOrderRequest, SimpleOrderStatus, SimpleQuoteResponse};

impl ValrClient {
    /// Get a quote for a simple buy/sell
    ///
    /// POST /v1/simple/{pair}/quote
    pub async fn get_simple_quote(
        &self,
        pair: &str,
        request: &SimpleOrderRequest,
    ) -> Result<SimpleQuoteResponse> {
        let endpoint = format!("/v1/simple/{}/quote", pair);
        let body = serde_json::to_string(request)?;
        let builder = self.signed_request(Method::POST, &endpoint, Some(body))?;
        self.send_json(builder).await
    }

    /// Place a simple buy/sell order
    ///
    /// POST /v1/simple/{pair}/order
    pub async fn new_simple_order(
        &self,
        pair: &str,
        request: &SimpleOrderRequest,
    ) -> Result<OrderPlacedResponse> {
        let endpoint = format!("/v1/simple/{}/order", pair);
        let body = serde_json::to_string(request)?;
        let builder = self.signed_request(Method::POST, &endpoint, Some(body))?;
        self.send_json(builder).await
    }

    /// Check the status of a simple order
    ///
    /// GET /v1/simple/{pair}/order/{id}
    pub async fn get_simple_order_status(
        &self,
        pair: &str,
        order_id: &str,
    ) -> Result<SimpleOrderStatus> {
        let endpoint = format!("/v1/simple/{}/order/{}", pair, order_id);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }
}
