//! Questionnaire lifecycle commands: /newrequest and /cancel

use teloxide::{Bot, types::Message};
use tracing::info;

use crate::handlers::{send_replies, send_text};
use crate::services::ServiceFactory;
use crate::utils::errors::{TravelBotError, Result};

const CANCELLED: &str = "Диалог прерван. Ваши данные не сохранены.\n\
                         Чтобы начать заново, нажмите /newrequest";

fn sender_id(msg: &Message) -> Result<i64> {
    msg.from
        .as_ref()
        .map(|user| user.id.0 as i64)
        .ok_or_else(|| TravelBotError::InvalidInput("No user in message".to_string()))
}

/// Handle /newrequest command - reset and ask the first question
pub async fn handle_new_request(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user_id = sender_id(&msg)?;
    info!(user_id = user_id, "Starting new request");

    let replies = services.conversation.begin(user_id).await?;
    send_replies(&bot, msg.chat.id, None, replies, services.format()).await
}

/// Handle /cancel command - abandon the current questionnaire
pub async fn handle_cancel(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user_id = sender_id(&msg)?;
    let removed = services.conversation.cancel(user_id).await?;
    info!(user_id = user_id, removed = removed, "User cancelled the dialog");

    let format = services.format();
    send_text(&bot, msg.chat.id, format.escape(CANCELLED), format).await
}
