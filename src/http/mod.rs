//! HTTP client layer — `AliceHttp` with per-endpoint retry policies.

pub mod client;
pub mod response;
pub mod retry;

pub use client::AliceHttp;
pub use response::RawResponse;
pub use retry::{RetryConfig, RetryPolicy};
