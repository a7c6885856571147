//! Notification service implementation
//!
//! Delivers confirmed travel requests to the manager chat. The conversation
//! engine only depends on the [`Notifier`] trait; [`TelegramNotifier`] is the
//! production implementation.

use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};
use tracing::{debug, error, info};

use crate::models::{TravelRequest, UserInfo};
use crate::utils::errors::{NotifyError, NotifyResult};
use crate::utils::helpers::OutputFormat;

/// Delivery of a finished request to the operator
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, request: &TravelRequest, user: &UserInfo) -> NotifyResult<()>;
}

/// Sends rendered requests to a fixed Telegram chat
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    manager_chat: Option<ChatId>,
    format: OutputFormat,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, manager_chat: Option<ChatId>, format: OutputFormat) -> Self {
        Self {
            bot,
            manager_chat,
            format,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, request: &TravelRequest, user: &UserInfo) -> NotifyResult<()> {
        info!(manager_chat = ?self.manager_chat, user_id = user.id, "Sending request to manager");

        let chat_id = self.manager_chat.ok_or_else(|| {
            error!("Manager chat is not configured, request cannot be delivered");
            NotifyError::NotConfigured
        })?;

        let text = request.render_report(user, self.format);
        debug!(chat_id = ?chat_id, report = %text, "Rendered manager report");

        let mut send_request = self.bot.send_message(chat_id, text);
        if let Some(parse_mode) = self.format.parse_mode() {
            send_request = send_request.parse_mode(parse_mode);
        }

        match send_request.await {
            Ok(_) => {
                info!(chat_id = ?chat_id, user_id = user.id, "Request delivered to manager");
                Ok(())
            }
            Err(e) => {
                let error = NotifyError::from(e);
                match &error {
                    NotifyError::BotBlocked => error!(chat_id = ?chat_id, "Manager has blocked the bot"),
                    NotifyError::ChatNotFound => error!(chat_id = ?chat_id, "Manager chat not found, check MANAGER_CHAT_ID"),
                    other => error!(chat_id = ?chat_id, error = %other, "Failed to send request to manager"),
                }
                Err(error)
            }
        }
    }
}
