//! Message handlers module
//!
//! Routes free-text answers into the conversation engine

use teloxide::{Bot, types::Message};
use tracing::debug;

use crate::handlers::commands::help::help_text;
use crate::handlers::{send_replies, send_text};
use crate::models::UserInfo;
use crate::services::ServiceFactory;
use crate::state::Outcome;
use crate::utils::errors::{TravelBotError, Result};

const UNKNOWN_COMMAND: &str = "Неизвестная команда. Используйте /help для просмотра доступных команд.";
const TEXT_ONLY: &str = "Пожалуйста, ответьте текстовым сообщением.";

/// Handle incoming messages that are not bot commands
pub async fn handle_message(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = msg
        .from
        .as_ref()
        .map(UserInfo::from)
        .ok_or_else(|| TravelBotError::InvalidInput("No user in message".to_string()))?;
    let chat_id = msg.chat.id;
    let format = services.format();

    debug!(user_id = user.id, chat_id = ?chat_id, "Processing message");

    let Some(text) = msg.text() else {
        if services.conversation.current_step(user.id).await?.is_some() {
            send_text(&bot, chat_id, format.escape(TEXT_ONLY), format).await?;
        }
        return Ok(());
    };

    if text.starts_with('/') {
        debug!(user_id = user.id, text = %text, "Unknown command");
        return send_text(&bot, chat_id, format.escape(UNKNOWN_COMMAND), format).await;
    }

    match services.conversation.handle_text(&user, text).await? {
        Outcome::NoSession => send_text(&bot, chat_id, help_text(format), format).await,
        Outcome::Ignored => Ok(()),
        Outcome::Replies(replies) => send_replies(&bot, chat_id, None, replies, format).await,
    }
}
