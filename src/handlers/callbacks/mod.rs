//! Callback query handlers module
//!
//! Inline keyboard presses. The only menu in the questionnaire is the hotel level.

use teloxide::{Bot, prelude::*, types::{CallbackQuery, ChatId}};
use tracing::{info, warn};

use crate::handlers::send_replies;
use crate::models::hotel::is_hotel_callback;
use crate::models::UserInfo;
use crate::services::ServiceFactory;
use crate::state::Outcome;
use crate::utils::errors::Result;

const NO_DIALOG: &str = "Диалог не активен. Начните заново /newrequest";
const WRONG_STEP: &str = "Неверный шаг диалога";

/// Main callback query dispatcher
pub async fn handle_callback_query(bot: Bot, query: CallbackQuery, services: ServiceFactory) -> Result<()> {
    let user = UserInfo::from(&query.from);
    let data = query.data.clone().unwrap_or_default();

    info!(user_id = user.id, callback_data = %data, "Callback query received");

    let outcome = if is_hotel_callback(&data) {
        services.conversation.handle_selection(&user, &data).await?
    } else {
        warn!(user_id = user.id, callback_data = %data, "Unknown callback data");
        Outcome::Ignored
    };

    // Always answer so the client stops showing the loading state
    let mut answer = bot.answer_callback_query(query.id.clone());
    match &outcome {
        Outcome::NoSession => answer = answer.text(NO_DIALOG),
        Outcome::Ignored => answer = answer.text(WRONG_STEP),
        Outcome::Replies(_) => {}
    }
    if let Err(e) = answer.await {
        warn!(error = %e, callback_id = %query.id, "Failed to answer callback query");
    }

    if let Outcome::Replies(replies) = outcome {
        let chat_id = query
            .message
            .as_ref()
            .map(|m| m.chat().id)
            .unwrap_or(ChatId(user.id));
        let origin = query.message.as_ref().map(|m| m.id());
        send_replies(&bot, chat_id, origin, replies, services.format()).await?;
    }

    Ok(())
}
