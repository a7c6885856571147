//! Start command handler

use teloxide::{Bot, types::Message};
use tracing::info;

use crate::handlers::send_text;
use crate::models::UserInfo;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::OutputFormat;

fn welcome_text(format: OutputFormat) -> String {
    format!(
        "{}\n{}\n\n{}\n{}\n\n{}",
        format.bold("🎉 Добро пожаловать в TravelBot!"),
        format.escape("Я помогу вам подобрать идеальное путешествие."),
        format.bold("Доступные команды:"),
        format.escape(
            "/newrequest - Начать оформление новой заявки\n\
             /help - Получить справку\n\
             /cancel - Отменить текущий диалог"
        ),
        format.escape("Просто нажмите /newrequest, чтобы начать!"),
    )
}

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let format = services.format();
    send_text(&bot, msg.chat.id, welcome_text(format), format).await?;

    if let Some(user) = msg.from.as_ref().map(UserInfo::from) {
        info!(user_id = user.id, username = user.username.as_deref(), "User started the bot");
    }

    Ok(())
}
