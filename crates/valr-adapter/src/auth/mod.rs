/*
[INPUT]:  API key credentials and request parameters
[OUTPUT]: Signed request headers and signature verification
[POS]:    Auth layer - handles VALR API authentication
[UPDATE]: When signing algorithm or credential sources change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::RequestSigner;
