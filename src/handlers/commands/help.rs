//! Help command handler

use teloxide::{Bot, types::Message};
use crate::handlers::send_text;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::OutputFormat;

/// Usage text, also sent when free text arrives outside a questionnaire
pub fn help_text(format: OutputFormat) -> String {
    format!(
        "{}\n\n{}\n\n{}\n{}\n\n{}",
        format.bold("Помощь по боту"),
        format.escape("Этот бот собирает ваши пожелания к путешествию и передает их нашему менеджеру."),
        format.bold("Как это работает:"),
        format.escape(
            "1. Нажмите /newrequest\n\
             2. Ответьте на 10 вопросов о направлении, датах, бюджете и отеле\n\
             3. Проверьте превью и подтвердите заявку\n\
             4. Менеджер свяжется с вами в течение 24 часов"
        ),
        format.escape("Вы можете прервать заполнение заявки командой /cancel."),
    )
}

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    let format = services.format();
    send_text(&bot, msg.chat.id, help_text(format), format).await
}
