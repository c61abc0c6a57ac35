//! Error Types
//!
//! Failures surfaced to the notification sink.

use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure of a backend call
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend unreachable or the request never completed
    #[error("Network error. Backend unreachable.")]
    Network(#[source] reqwest::Error),

    /// Token missing, expired or rejected
    #[error("Session expired. Please log in again.")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// Backend answered with an error status
    #[error("{0}")]
    Rejected(String),

    /// Response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Reading a picked file failed
    #[error("Could not read file: {0}")]
    File(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err)
        }
    }
}

/// Client-side form check that failed before any request was made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter {0}.")]
    Missing(&'static str),

    #[error("{0}")]
    Invalid(&'static str),

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Missing("a reason").to_string(),
            "Please enter a reason."
        );
        assert_eq!(
            ApiError::Rejected("Rule not found".into()).to_string(),
            "Rule not found"
        );
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::NotFound.is_unauthorized());
    }
}
