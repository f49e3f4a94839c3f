//! HTTP module
//!
//! The REST transport consumed by the operation groups.
//!
//! # Features
//!
//! - **Injectable transport**: everything goes through the [`RestClient`] trait
//! - **Error classification**: failures become typed `ClashDetectionError`s
//! - **Rate Limiting**: optional token bucket limiter using governor

mod client;
mod rate_limit;
mod rest;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use rest::{RestClient, RestRequest};

#[cfg(test)]
mod tests;
