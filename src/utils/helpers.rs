//! Helper functions and utilities
//!
//! Text markup helpers shared by every outgoing message. Everything the bot
//! sends goes through one [`OutputFormat`], so user-supplied text is escaped
//! the same way in prompts, previews and manager reports.

use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use teloxide::types::ParseMode;
use teloxide::utils::{html, markdown};

use crate::utils::errors::TravelBotError;

/// Markup dialect used for outgoing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    MarkdownV2,
    Plain,
}

impl OutputFormat {
    /// Telegram parse mode for this format
    pub fn parse_mode(self) -> Option<ParseMode> {
        match self {
            OutputFormat::Html => Some(ParseMode::Html),
            OutputFormat::MarkdownV2 => Some(ParseMode::MarkdownV2),
            OutputFormat::Plain => None,
        }
    }

    /// Escape arbitrary text so it renders literally
    pub fn escape(self, text: &str) -> String {
        match self {
            OutputFormat::Html => html::escape(text),
            OutputFormat::MarkdownV2 => markdown::escape(text),
            OutputFormat::Plain => text.to_string(),
        }
    }

    /// Escape text and render it bold
    pub fn bold(self, text: &str) -> String {
        let escaped = self.escape(text);
        match self {
            OutputFormat::Html => html::bold(&escaped),
            OutputFormat::MarkdownV2 => markdown::bold(&escaped),
            OutputFormat::Plain => escaped,
        }
    }

    /// Render `label: value` with a bold label and an escaped value
    pub fn field(self, label: &str, value: &str) -> String {
        format!("{} {}", self.bold(&format!("{}:", label)), self.escape(value))
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::MarkdownV2 => "markdownv2",
            OutputFormat::Plain => "plain",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TravelBotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "markdownv2" | "markdown" => Ok(OutputFormat::MarkdownV2),
            "plain" | "none" => Ok(OutputFormat::Plain),
            other => Err(TravelBotError::Config(format!(
                "Unknown parse mode: {}. Valid modes: html, markdownv2, plain",
                other
            ))),
        }
    }
}

/// Format a submission timestamp for display in local time
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string()
}
