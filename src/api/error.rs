//! API Error
//!
//! Every failed call (network, HTTP status, undecodable body) ends up here.

use thiserror::Error;

/// Request failure carrying the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Request(String),
}

impl ApiError {
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        match self {
            Self::Request(message) => message,
        }
    }
}
