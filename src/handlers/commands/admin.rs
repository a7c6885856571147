//! Administrative and diagnostic commands
//!
//! `/config` and `/test` are limited to `bot.admin_ids` when that list is set;
//! `/myid` is open to everyone so a manager can look up the chat id to configure.

use teloxide::{prelude::*, types::Message};
use tracing::{info, warn};

use crate::handlers::send_text;
use crate::models::{TravelRequest, UserInfo};
use crate::services::ServiceFactory;
use crate::utils::errors::{TravelBotError, Result};

const NOT_ALLOWED: &str = "Эта команда доступна только администраторам.";

fn sender(msg: &Message) -> Result<UserInfo> {
    msg.from
        .as_ref()
        .map(UserInfo::from)
        .ok_or_else(|| TravelBotError::InvalidInput("No user in message".to_string()))
}

async fn ensure_admin(bot: &Bot, msg: &Message, services: &ServiceFactory, user: &UserInfo) -> Result<bool> {
    if services.settings.bot.is_admin(user.id) {
        return Ok(true);
    }

    warn!(user_id = user.id, "Administrative command rejected");
    let format = services.format();
    send_text(bot, msg.chat.id, format.escape(NOT_ALLOWED), format).await?;
    Ok(false)
}

/// Handle /config command - show the effective configuration
pub async fn handle_config(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = sender(&msg)?;
    if !ensure_admin(&bot, &msg, &services, &user).await? {
        return Ok(());
    }

    let me = bot.get_me().await?;
    let format = services.format();
    let manager_chat = services
        .settings
        .bot
        .manager_chat()
        .map(|chat| chat.0.to_string())
        .unwrap_or_else(|| "не задан".to_string());
    let active_sessions = services.sessions.active_sessions().await?;

    let text = [
        format.bold("📋 Конфигурация бота:"),
        format.field("• Имя бота", &format!("@{}", me.username())),
        format.field("• ID бота", &me.id.0.to_string()),
        format.field("• ManagerChatID", &manager_chat),
        format.field("• Debug mode", &services.settings.bot.debug.to_string()),
        format.field("• Parse mode", format.name()),
        format.field("• Активных диалогов", &active_sessions.to_string()),
        String::new(),
        format.escape("Для теста отправки используйте /test"),
    ]
    .join("\n");

    send_text(&bot, msg.chat.id, text, format).await
}

/// Handle /test command - deliver a synthetic request to the manager
pub async fn handle_test(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let user = sender(&msg)?;
    if !ensure_admin(&bot, &msg, &services, &user).await? {
        return Ok(());
    }

    info!(user_id = user.id, "Sending synthetic request to manager");
    let format = services.format();
    let text = match services.notifier.deliver(&TravelRequest::synthetic(), &user).await {
        Ok(()) => "✅ Тестовая заявка отправлена менеджеру. Проверьте, получил ли он её.".to_string(),
        Err(e) => format!("❌ Ошибка отправки тестовой заявки: {}", e),
    };

    send_text(&bot, msg.chat.id, format.escape(&text), format).await
}

/// Handle /myid command - show the caller's chat id
pub async fn handle_my_id(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let format = services.format();
    let text = format.field("Ваш Chat ID", &msg.chat.id.0.to_string());
    send_text(&bot, msg.chat.id, text, format).await
}
