//! Error handling for the store module

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The response body was not the JSON rows we asked for.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl StoreError {
    pub async fn from_response(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        StoreError::Http { status, message }
    }

    /// Log level the developer log should use for this failure.
    pub fn classify(&self) -> LogLevel {
        match self {
            // Bad key or row-level security refusing the anon role
            StoreError::Http { status, .. } if *status == 401 || *status == 403 => {
                LogLevel::Error
            }
            StoreError::Http { status, .. } if *status == 429 => LogLevel::Warn,
            StoreError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            // Usually a schema mismatch, which will not fix itself
            StoreError::Decode(_) => LogLevel::Error,
            StoreError::Reqwest(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}
