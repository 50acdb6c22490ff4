//! Error response bodies for reporting failures to callers
//!
//! A response carries a human-readable message and, when an error caused it,
//! the error's string form. No other structure is imposed on the error.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            message: message.into(),
            error: None,
        }
    }

    /// Response for a failure caused by `err`
    pub fn with_error(message: impl Into<String>, err: &dyn Display) -> Self {
        ErrorResponse {
            message: message.into(),
            error: Some(err.to_string()),
        }
    }
}
