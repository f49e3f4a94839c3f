//! # Clash Detection Client
//!
//! Async Rust client for the iTwin Platform Clash Detection API.
//!
//! ## Features
//!
//! - **Typed Errors**: every failed exchange becomes a `ClashDetectionError` with a closed code set
//! - **Lazy Listings**: paged collections are pulled on demand, one request per page
//! - **Injectable Transport**: bring your own `RestClient` or use the reqwest default
//! - **Access Tokens**: per call, or from an `AccessTokenProvider`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clash_detection_client::{ClashDetectionClient, ClientOptions, Result};
//! use clash_detection_client::operations::{CollectionUrlParams, GetTestListParams};
//! use clash_detection_client::pagination::take;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ClashDetectionClient::new(
//!         ClientOptions::builder().access_token("Bearer ey...").build(),
//!     )?;
//!
//!     let mut tests = client.tests().list(GetTestListParams {
//!         url_params: Some(CollectionUrlParams::project("<project id>").top(100)),
//!         ..GetTestListParams::default()
//!     })?;
//!
//!     for test in take(&mut tests, 10).await? {
//!         println!("{} {}", test.id, test.display_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    ClashDetectionClient                      │
//! │  templates()  rules()  tests()  runs()  results()  imodel()  │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────┬────────────────────┐
//! │  Pagination  │        Operations        │     API errors     │
//! ├──────────────┼──────────────────────────┼────────────────────┤
//! │ PageQuery    │ URL formatting           │ ErrorCode          │
//! │ Page iterator│ Headers, auth            │ ErrorDetail        │
//! │ List iterator│ Entity decoding          │ Response parser    │
//! │ take/to_array│                          │                    │
//! └──────────────┴──────────────────────────┴────────────────────┘
//!                                │
//!                  RestClient (reqwest, governor)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Clash Detection API error taxonomy and response parser
pub mod api_error;

/// Common types and type aliases
pub mod types;

/// Access token sources
pub mod auth;

/// Endpoint and client configuration
pub mod config;

/// REST transport with rate limiting
pub mod http;

/// Lazy paged iteration
pub mod pagination;

/// API request and response entities
pub mod models;

/// Operation groups per API resource
pub mod operations;

/// Client entry point
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api_error::{ClashDetectionError, ErrorCode, ErrorDetail};
pub use auth::{AccessTokenProvider, StaticAccessToken};
pub use client::ClashDetectionClient;
pub use config::{ApiOptions, ClientOptions};
pub use error::{Error, Result};
pub use pagination::{take, to_array, EntityIterator, EntityListIterator, EntityPageIterator};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
