/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod market;
pub mod orders;
pub mod public;
pub mod simple;
pub mod wallet;

pub use error::{Result, ValrError};

pub use client::{ClientConfig, ValrClient};
