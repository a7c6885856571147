//! TravelBot Telegram Bot
//!
//! A Telegram bot that walks a client through a short travel questionnaire,
//! shows a preview of the collected request and forwards the confirmed request
//! to a manager chat.

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{TravelBotError, NotifyError, Result};

// Re-export main components for easy access
pub use services::{ServiceFactory, Notifier, TelegramNotifier};
pub use state::{ConversationEngine, InMemorySessionStore, SessionStore, Step};
pub use models::{TravelRequest, UserInfo};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

