//! Skyluxe data representations.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use derive_more::Error;

pub mod offer;
pub mod search;

/// API error.
///
/// Every non-2xx response from the gateway carries this body.
#[derive(Clone, Debug, Deserialize, Serialize, Error)]
pub struct Error {
    /// A user-friendly message of the error.
    #[serde(rename = "error")]
    pub message: String,
    /// An API error code.
    #[serde(default = "ErrorCode::unknown")]
    pub code: ErrorCode,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

/// An API error code.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "u32", into = "u32")]
pub enum ErrorCode {
    /// The request's query string could not be read.
    MalformedQuery,
    /// The route was not found.
    NotFound,
    /// An internal server error occured.
    ///
    /// This is a bug, usually.
    InternalServerError,
    /// The gateway has no credentials for the flight provider.
    MissingCredentials,
    /// The flight provider refused or failed the request.
    ProviderError,
    /// Any other error code.
    Other(u32),
}

impl ErrorCode {
    fn unknown() -> ErrorCode {
        ErrorCode::Other(0)
    }
}

impl From<u32> for ErrorCode {
    fn from(value: u32) -> Self {
        match value {
            4000 => ErrorCode::MalformedQuery,
            4003 => ErrorCode::NotFound,
            5000 => ErrorCode::InternalServerError,
            5001 => ErrorCode::MissingCredentials,
            5002 => ErrorCode::ProviderError,
            other => ErrorCode::Other(other),
        }
    }
}

impl From<ErrorCode> for u32 {
    fn from(value: ErrorCode) -> Self {
        match value {
            ErrorCode::MalformedQuery => 4000,
            ErrorCode::NotFound => 4003,
            ErrorCode::InternalServerError => 5000,
            ErrorCode::MissingCredentials => 5001,
            ErrorCode::ProviderError => 5002,
            ErrorCode::Other(other) => other,
        }
    }
}
