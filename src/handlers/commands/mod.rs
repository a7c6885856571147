//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;
pub mod request;
pub mod admin;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Приветствие и список команд")]
    Start,
    #[command(description = "Справка по боту")]
    Help,
    #[command(description = "Начать оформление новой заявки")]
    NewRequest,
    #[command(description = "Отменить текущий диалог")]
    Cancel,
    #[command(description = "Показать конфигурацию бота (для администраторов)")]
    Config,
    #[command(description = "Отправить тестовую заявку менеджеру (для администраторов)")]
    Test,
    #[command(description = "Показать ваш Chat ID")]
    MyId,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, services).await,
        Command::Help => help::handle_help(bot, msg, services).await,
        Command::NewRequest => request::handle_new_request(bot, msg, services).await,
        Command::Cancel => request::handle_cancel(bot, msg, services).await,
        Command::Config => admin::handle_config(bot, msg, services).await,
        Command::Test => admin::handle_test(bot, msg, services).await,
        Command::MyId => admin::handle_my_id(bot, msg, services).await,
    }
}
