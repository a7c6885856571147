//! Error handling for TravelBot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use teloxide::{ApiError, RequestError};
use thiserror::Error;

/// Main error type for TravelBot application
#[derive(Error, Debug)]
pub enum TravelBotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("No active session for user {user_id}")]
    SessionNotFound { user_id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures while delivering a request to the manager chat
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("manager chat is not configured")]
    NotConfigured,

    #[error("bot was blocked by the manager")]
    BotBlocked,

    #[error("manager chat not found")]
    ChatNotFound,

    #[error("delivery failed: {0}")]
    Transport(#[source] RequestError),
}

/// Result type alias for TravelBot operations
pub type Result<T> = std::result::Result<T, TravelBotError>;

/// Result type alias for delivery operations
pub type NotifyResult<T> = std::result::Result<T, NotifyError>;

impl From<RequestError> for NotifyError {
    fn from(error: RequestError) -> Self {
        match error {
            RequestError::Api(ApiError::BotBlocked) => NotifyError::BotBlocked,
            RequestError::Api(ApiError::ChatNotFound) => NotifyError::ChatNotFound,
            other => NotifyError::Transport(other),
        }
    }
}
