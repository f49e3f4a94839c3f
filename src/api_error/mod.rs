//! API error module
//!
//! Normalizes every failed HTTP exchange with the Clash Detection service
//! into one typed [`ClashDetectionError`] with a closed [`ErrorCode`] set.

mod parser;
mod types;

pub use parser::{DEFAULT_ERROR_MESSAGE, UNAUTHORIZED_MESSAGE};
pub use types::{ClashDetectionError, ErrorCode, ErrorDetail, RawResponse};
