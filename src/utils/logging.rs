//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the TravelBot application.

use tracing::{info, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::models::{TravelRequest, UserInfo};
use crate::utils::errors::{TravelBotError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig, debug_mode: bool) -> Result<Option<WorkerGuard>> {
    let level = if debug_mode { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_new(level)
        .map_err(|e| TravelBotError::Config(format!("Invalid log filter '{}': {}", level, e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "travel_bot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| TravelBotError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a request that is about to be delivered to the manager
pub fn log_submission(request: &TravelRequest, user: &UserInfo) {
    info!(
        user_id = user.id,
        username = user.username.as_deref(),
        destination = %request.destination,
        budget = %request.budget,
        "Submitting travel request"
    );
    if let Ok(payload) = serde_json::to_string(request) {
        debug!(user_id = user.id, request = %payload, "Submitted request payload");
    }
}
