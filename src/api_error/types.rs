//! Clash Detection API error types
//!
//! The error code set is closed. Codes sent by the service that are not
//! listed here resolve to [`ErrorCode::Unrecognized`] instead of failing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Possible error codes returned by the Clash Detection API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Status present but the code was missing or not one of the known values
    Unrecognized,
    /// No status code available (transport failure)
    Unknown,
    Unauthorized,
    InsufficientPermissions,
    RateLimitExceeded,
    TooManyRequests,
    InvalidClashDetectionRequest,
    RequestTooLarge,
    ResourceQuotaExceeded,
    MutuallyExclusivePropertiesProvided,
    MissingRequiredProperty,
    MissingRequiredParameter,
    MissingRequiredHeader,
    InvalidValue,
    InvalidHeaderValue,
    InvalidRequestBody,
    MissingRequestBody,
    ProjectNotFound,
    /// Wire value is `iModelNotFound`
    IModelNotFound,
    NamedVersionNotFound,
    ClashDetectionResultNotFound,
    ClashDetectionSuppressionRuleNotFound,
    SuppressionRuleTemplateNotFound,
    ClashDetectionRunNotFound,
    ClashDetectionTestNotFound,
}

impl ErrorCode {
    /// Every known code, in declaration order
    pub const ALL: [ErrorCode; 25] = [
        Self::Unrecognized,
        Self::Unknown,
        Self::Unauthorized,
        Self::InsufficientPermissions,
        Self::RateLimitExceeded,
        Self::TooManyRequests,
        Self::InvalidClashDetectionRequest,
        Self::RequestTooLarge,
        Self::ResourceQuotaExceeded,
        Self::MutuallyExclusivePropertiesProvided,
        Self::MissingRequiredProperty,
        Self::MissingRequiredParameter,
        Self::MissingRequiredHeader,
        Self::InvalidValue,
        Self::InvalidHeaderValue,
        Self::InvalidRequestBody,
        Self::MissingRequestBody,
        Self::ProjectNotFound,
        Self::IModelNotFound,
        Self::NamedVersionNotFound,
        Self::ClashDetectionResultNotFound,
        Self::ClashDetectionSuppressionRuleNotFound,
        Self::SuppressionRuleTemplateNotFound,
        Self::ClashDetectionRunNotFound,
        Self::ClashDetectionTestNotFound,
    ];

    /// The code as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unrecognized => "Unrecognized",
            Self::Unknown => "Unknown",
            Self::Unauthorized => "Unauthorized",
            Self::InsufficientPermissions => "InsufficientPermissions",
            Self::RateLimitExceeded => "RateLimitExceeded",
            Self::TooManyRequests => "TooManyRequests",
            Self::InvalidClashDetectionRequest => "InvalidClashDetectionRequest",
            Self::RequestTooLarge => "RequestTooLarge",
            Self::ResourceQuotaExceeded => "ResourceQuotaExceeded",
            Self::MutuallyExclusivePropertiesProvided => "MutuallyExclusivePropertiesProvided",
            Self::MissingRequiredProperty => "MissingRequiredProperty",
            Self::MissingRequiredParameter => "MissingRequiredParameter",
            Self::MissingRequiredHeader => "MissingRequiredHeader",
            Self::InvalidValue => "InvalidValue",
            Self::InvalidHeaderValue => "InvalidHeaderValue",
            Self::InvalidRequestBody => "InvalidRequestBody",
            Self::MissingRequestBody => "MissingRequestBody",
            Self::ProjectNotFound => "ProjectNotFound",
            Self::IModelNotFound => "iModelNotFound",
            Self::NamedVersionNotFound => "NamedVersionNotFound",
            Self::ClashDetectionResultNotFound => "ClashDetectionResultNotFound",
            Self::ClashDetectionSuppressionRuleNotFound => "ClashDetectionSuppressionRuleNotFound",
            Self::SuppressionRuleTemplateNotFound => "SuppressionRuleTemplateNotFound",
            Self::ClashDetectionRunNotFound => "ClashDetectionRunNotFound",
            Self::ClashDetectionTestNotFound => "ClashDetectionTestNotFound",
        }
    }

    /// Exact, case-sensitive lookup of a wire code
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == code)
    }

    /// Lookup that degrades to [`ErrorCode::Unrecognized`] for missing or unknown codes
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(Self::parse).unwrap_or(Self::Unrecognized)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::resolve(Some(&raw)))
    }
}

/// Error detail information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Detail code, resolved independently of the top-level code
    pub code: ErrorCode,
    /// Message that describes the error detail
    pub message: String,
    /// Name of the property or parameter related to the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Error produced for every failed Clash Detection API request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ClashDetectionError {
    /// Error code
    pub code: ErrorCode,
    /// Displayable message, including numbered detail lines
    pub message: String,
    /// Parsed details, absent when the response carried none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetail>>,
}

impl ClashDetectionError {
    /// Create an error without details
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }
}

/// The parts of an HTTP response the error parser looks at
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResponse {
    /// HTTP status, `None` when the request never produced a response
    pub status_code: Option<u16>,
    /// Response body, if it could be read as JSON
    pub body: Option<serde_json::Value>,
}

impl RawResponse {
    /// A response with a status and JSON body
    pub fn new(status_code: u16, body: Option<serde_json::Value>) -> Self {
        Self {
            status_code: Some(status_code),
            body,
        }
    }

    /// A transport failure with no status
    pub fn transport_failure() -> Self {
        Self::default()
    }
}
