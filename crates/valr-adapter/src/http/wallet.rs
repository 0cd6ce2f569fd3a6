/*
[INPUT]:  Currency identifiers and withdrawal requests
[OUTPUT]: Deposit addresses, withdrawal state and wallet history
[POS]:    HTTP layer - crypto and fiat wallet endpoints (require auth)
[UPDATE]: When adding new wallet endpoints or changing withdrawal flow
*/

use reqwest::Method;

use crate::http::{Result, ValrClient};
use crate::types::{
    BankAccount, CryptoWithdrawalRequest, DepositAddress, DepositRecord, FiatWithdrawalRequest,
    WithdrawalInfo, WithdrawalQueuedResponse, WithdrawalStatus,
};

impl ValrClient {
    /// Get the default deposit address for a currency
    ///
    /// GET /v1/wallet/crypto/{currency}/deposit/address
    pub async fn get_deposit_address(&self, currency: &str) -> Result<DepositAddress> {
        let endpoint = format!("/v1/wallet/crypto/{}/deposit/address", currency);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Get withdrawal limits and cost for a currency
    ///
    /// GET /v1/wallet/crypto/{currency}/withdraw
    pub async fn get_withdrawal_info(&self, currency: &str) -> Result<WithdrawalInfo> {
        let endpoint = format!("/v1/wallet/crypto/{}/withdraw", currency);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Queue a new crypto withdrawal
    ///
    /// POST /v1/wallet/crypto/{currency}/withdraw
    pub async fn new_crypto_withdrawal(
        &self,
        currency: &str,
        request: &CryptoWithdrawalRequest,
    ) -> Result<WithdrawalQueuedResponse> {
        let endpoint = format!("/v1/wallet/crypto/{}/withdraw", currency);
        let body = serde_json::to_string(request)?;
        let builder = self.signed_request(Method::POST, &endpoint, Some(body))?;
        self.send_json(builder).await
    }

    /// Check the status of a withdrawal
    ///
    /// GET /v1/wallet/crypto/{currency}/withdraw/{id}
    pub async fn get_withdrawal_status(
        &self,
        currency: &str,
        withdrawal_id: &str,
    ) -> Result<WithdrawalStatus> {
        let endpoint = format!("/v1/wallet/crypto/{}/withdraw/{}", currency, withdrawal_id);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Get the deposit history for a currency
    ///
    /// GET /v1/wallet/crypto/{currency}/deposit/history?skip={skip}&limit={limit}
    pub async fn get_deposit_history(
        &self,
        currency: &str,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<DepositRecord>> {
        let endpoint = format!(
            "/v1/wallet/crypto/{}/deposit/history?skip={}&limit={}",
            currency, skip, limit
        );
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Get the withdrawal history for a currency
    ///
    /// GET /v1/wallet/crypto/{currency}/withdraw/history?skip={skip}&limit={limit}
    pub async fn get_withdrawal_history(
        &self,
        currency: &str,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<WithdrawalStatus>> {
        let endpoint = format!(
            "/v1/wallet/crypto/{}/withdraw/history?skip={}&limit={}",
            currency, skip, limit
        );
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// List bank accounts linked for a fiat currency
    ///
    /// GET /v1/wallet/fiat/{currency}/accounts
    pub async fn get_bank_accounts(&self, currency: &str) -> Result<Vec<BankAccount>> {
        let endpoint = format!("/v1/wallet/fiat/{}/accounts", currency);
        let builder = self.signed_request(Method::GET, &endpoint, None)?;
        self.send_json(builder).await
    }

    /// Queue a new fiat withdrawal to a linked bank account
    ///
    /// POST /v1/wallet/fiat/{currency}/withdraw
    pub async fn new_fiat_withdrawal(
        &self,
        currency: &str,
        request: &FiatWithdrawalRequest,
    ) -> Result<WithdrawalQueuedResponse> {
        let endpoint = format!("/v1/wallet/fiat/{}/withdraw", currency);
        let body = serde_json::to_string(request)?;
        let builder = self.signed_request(Method::POST, &endpoint, Some(body))?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, ValrClient};
    use crate::types::CryptoWithdrawalRequest;
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_new_crypto_withdrawal_posts_signed_body() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/v1/wallet/crypto/ETH/withdraw"))
            .and(header_exists("X-VALR-SIGNATURE"))
            .and(body_json(serde_json::json!({
                "address": "0x8923Ab...",
                "amount": "0.1",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"id": "b8cd2f90-b8b4-4a3c-ac27-8c89e2b7964e"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut client = ValrClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");
        client.set_credentials(Credentials::new("test-key", "test-secret"));

        let request = CryptoWithdrawalRequest {
            address: "0x8923Ab...".to_string(),
            amount: "0.1".parse().expect("amount"),
            payment_reference: None,
        };
        let queued = client
            .new_crypto_withdrawal("ETH", &request)
            .await
            .expect("new_crypto_withdrawal failed");

        assert_eq!(queued.id, "b8cd2f90-b8b4-4a3c-ac27-8c89e2b7964e");
    }
}
