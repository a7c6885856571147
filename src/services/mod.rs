//! Services module
//!
//! This module wires the conversation engine to its collaborators

pub mod notification;

// Re-export commonly used services
pub use notification::{Notifier, TelegramNotifier};

use std::sync::Arc;

use teloxide::Bot;

use crate::config::settings::Settings;
use crate::state::{ConversationEngine, InMemorySessionStore, SessionStore};
use crate::utils::errors::Result;

/// Service factory for creating and sharing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub settings: Settings,
    pub sessions: Arc<dyn SessionStore>,
    pub notifier: Arc<dyn Notifier>,
    pub conversation: ConversationEngine,
}

impl ServiceFactory {
    /// Create a ServiceFactory backed by an in-memory session store and the
    /// Telegram notifier
    pub fn new(bot: Bot, settings: Settings) -> Result<Self> {
        let format = settings.bot.output_format()?;
        let notifier = TelegramNotifier::new(bot, settings.bot.manager_chat(), format);

        Self::with_components(settings, Arc::new(InMemorySessionStore::new()), Arc::new(notifier))
    }

    /// Create a ServiceFactory from explicit collaborators
    pub fn with_components(
        settings: Settings,
        sessions: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let format = settings.bot.output_format()?;
        let conversation = ConversationEngine::new(sessions.clone(), notifier.clone(), format);

        Ok(Self {
            settings,
            sessions,
            notifier,
            conversation,
        })
    }

    /// Output format used for every outgoing message
    pub fn format(&self) -> crate::utils::helpers::OutputFormat {
        self.conversation.format()
    }
}
