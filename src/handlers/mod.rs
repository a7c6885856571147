//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for free-text answers

pub mod commands;
pub mod callbacks;
pub mod messages;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
pub use callbacks::handle_callback_query;
pub use messages::handle_message;

use teloxide::{prelude::*, types::{ChatId, MessageId}};
use tracing::{debug, warn};

use crate::state::Reply;
use crate::utils::errors::Result;
use crate::utils::helpers::OutputFormat;

/// Send engine replies to a chat.
///
/// `origin` is the message a menu selection came from; edits fall back to a
/// new message when it is unknown.
pub async fn send_replies(
    bot: &Bot,
    chat_id: ChatId,
    origin: Option<MessageId>,
    replies: Vec<Reply>,
    format: OutputFormat,
) -> Result<()> {
    for reply in replies {
        match reply {
            Reply::Text(text) => {
                send_text(bot, chat_id, text, format).await?;
            }
            Reply::Menu { text, keyboard } => {
                let mut request = bot.send_message(chat_id, text).reply_markup(keyboard);
                if let Some(parse_mode) = format.parse_mode() {
                    request = request.parse_mode(parse_mode);
                }
                request.await?;
            }
            Reply::EditOrigin(text) => match origin {
                Some(message_id) => {
                    debug!(chat_id = ?chat_id, message_id = ?message_id, "Editing prompt in place");
                    let mut request = bot.edit_message_text(chat_id, message_id, text);
                    if let Some(parse_mode) = format.parse_mode() {
                        request = request.parse_mode(parse_mode);
                    }
                    request.await?;
                }
                None => {
                    warn!(chat_id = ?chat_id, "Origin message unavailable, sending edit as new message");
                    send_text(bot, chat_id, text, format).await?;
                }
            },
        }
    }

    Ok(())
}

/// Send a message with the configured parse mode
pub async fn send_text(bot: &Bot, chat_id: ChatId, text: String, format: OutputFormat) -> Result<()> {
    let mut request = bot.send_message(chat_id, text);
    if let Some(parse_mode) = format.parse_mode() {
        request = request.parse_mode(parse_mode);
    }
    request.await?;
    Ok(())
}
