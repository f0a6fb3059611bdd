//! Error Kinds
//!
//! Failures the form can observe from its collaborators.

use thiserror::Error;

/// Failure of a request to the backend or the geography service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// A response arrived but its body did not match the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The request could not be built, e.g. the body failed to serialize
    #[error("invalid request: {0}")]
    Request(String),
    /// The server answered with a non-success status
    #[error("server rejected request with HTTP {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Failure of the one-shot device position request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not available")]
    Unavailable,
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("position request timed out")]
    Timeout,
    #[error("geolocation failed: {0}")]
    Other(String),
}

impl GeolocationError {
    /// Map a `GeolocationPositionError.code` value to an error kind
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Other(message.into()),
        }
    }
}

/// An input `name` attribute that is not one of the form's text fields
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown form field: {0}")]
pub struct FieldNameError(pub String);
