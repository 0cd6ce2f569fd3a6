/*
[INPUT]:  Request parameters (timestamp, verb, path, body) and credentials
[OUTPUT]: Hex-encoded HMAC-SHA512 request signatures
[POS]:    Auth layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or payload format
*/

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::Credentials;

type HmacSha512 = Hmac<Sha512>;

/// Signs request payloads for authenticated endpoints.
///
/// The payload is the concatenation of the millisecond timestamp, the
/// uppercased HTTP verb, the path (including any query string), the request
/// body as sent on the wire, and the subaccount id when one is configured.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Sign a request and return the lowercase hex signature
    pub fn sign_request(&self, timestamp_ms: i64, verb: &str, path: &str, body: &str) -> String {
        let mac = self.mac_for(timestamp_ms, verb, path, body);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verify a signature against the given request parameters
    pub fn verify_signature(
        &self,
        signature: &str,
        timestamp_ms: i64,
        verb: &str,
        path: &str,
        body: &str,
    ) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        self.mac_for(timestamp_ms, verb, path, body)
            .verify_slice(&expected)
            .is_ok()
    }

    fn mac_for(&self, timestamp_ms: i64, verb: &str, path: &str, body: &str) -> HmacSha512 {
        let mut mac = HmacSha512::new_from_slice(self.credentials.api_secret().as_bytes())
            .expect("HMAC can take key of any size");

        mac.update(timestamp_ms.to_string().as_bytes());
        mac.update(verb.to_uppercase().as_bytes());
        mac.update(path.as_bytes());
        mac.update(body.as_bytes());
        if let Some(subaccount_id) = self.credentials.subaccount_id() {
            mac.update(subaccount_id.as_bytes());
        }
        mac
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TEST_SECRET: &str = "0e06e223696b1d9bc6d8df1f701a87326c16763d8f2ebaaacb1042b61d7c3035";
    const TEST_TIMESTAMP: i64 = 1_552_244_930_586;

    fn test_credentials() -> Credentials {
        Credentials::new(
            "41b24fab0d6443929f5cb76782815ca0da32f3190e7383f9fe7752e755868141",
            TEST_SECRET,
        )
    }

    #[test]
    fn test_sign_post_request_known_vector() {
        // echo -n '1552244930586POST/api/v1/withdraw{"currency":"eth","amount":"2.24353"}' \
        //   | openssl sha512 -hmac "$TEST_SECRET"
        let credentials = test_credentials();
        let signer = RequestSigner::new(&credentials);

        let signature = signer.sign_request(
            TEST_TIMESTAMP,
            "POST",
            "/api/v1/withdraw",
            r#"{"currency":"eth","amount":"2.24353"}"#,
        );

        assert_eq!(
            signature,
            "0b89e7b4c8236255a7d1bf415dcb745b14ba2cf679ae38f42b3207c5c0a1c6a8\
             48f6ea5466cccb1e38f54689d86ab4ea73f9cd0d600b90c91ef619828eb7e2fb"
        );
    }

    #[test]
    fn test_sign_get_request_known_vector() {
        // echo -n '1552244930586GET/api/v1/withdraw' | openssl sha512 -hmac "$TEST_SECRET"
        let credentials = test_credentials();
        let signer = RequestSigner::new(&credentials);

        let signature = signer.sign_request(TEST_TIMESTAMP, "GET", "/api/v1/withdraw", "");

        assert_eq!(
            signature,
            "475048965cef521871f5c4a3d9d692c3e3279e27c7b9cdaca07c1f1bd2fb27d4\
             fdb88ea86ef23290b585f03ce2e9af08b31387ca3c7dcdf7832dce7bcea7fdfc"
        );
    }

    #[rstest]
    #[case("get")]
    #[case("Get")]
    #[case("GET")]
    fn test_verb_is_uppercased_before_signing(#[case] verb: &str) {
        let credentials = test_credentials();
        let signer = RequestSigner::new(&credentials);

        let signature = signer.sign_request(TEST_TIMESTAMP, verb, "/api/v1/withdraw", "");

        assert_eq!(
            signature,
            signer.sign_request(TEST_TIMESTAMP, "GET", "/api/v1/withdraw", "")
        );
    }

    #[test]
    fn test_subaccount_changes_signature() {
        let plain = test_credentials();
        let scoped = test_credentials().with_subaccount("subaccount-1");

        let unsigned = RequestSigner::new(&plain).sign_request(TEST_TIMESTAMP, "GET", "/v1/account/balances", "");
        let scoped = RequestSigner::new(&scoped).sign_request(TEST_TIMESTAMP, "GET", "/v1/account/balances", "");

        assert_ne!(unsigned, scoped);
    }

    #[test]
    fn test_verify_signature_roundtrip() {
        let credentials = test_credentials();
        let signer = RequestSigner::new(&credentials);

        let signature = signer.sign_request(TEST_TIMESTAMP, "POST", "/v1/orders/limit", "{}");

        assert!(signer.verify_signature(&signature, TEST_TIMESTAMP, "POST", "/v1/orders/limit", "{}"));
        assert!(!signer.verify_signature(&signature, TEST_TIMESTAMP + 1, "POST", "/v1/orders/limit", "{}"));
        assert!(!signer.verify_signature("not-hex", TEST_TIMESTAMP, "POST", "/v1/orders/limit", "{}"));
    }
}
