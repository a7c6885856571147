//! Application settings management
//!
//! Settings are layered: built-in defaults, then `config.toml` (optional),
//! then `TRAVELBOT__SECTION__KEY` environment variables, and finally the flat
//! `BOT_TOKEN`, `MANAGER_CHAT_ID` and `DEBUG_MODE` variables.

use serde::{Deserialize, Serialize};
use teloxide::types::ChatId;

use crate::utils::helpers::OutputFormat;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Chat that receives confirmed requests. Zero is treated as unset.
    #[serde(default)]
    pub manager_chat_id: Option<i64>,
    #[serde(default)]
    pub debug: bool,
    /// One of `html`, `markdownv2` or `plain`
    pub parse_mode: String,
    /// Users allowed to run `/config` and `/test`; empty means everyone
    #[serde(default)]
    pub admin_ids: Vec<i64>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    #[serde(default)]
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from `config.toml`, `.env` and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load("config")
    }

    /// Load settings using the given configuration file (extension optional)
    pub fn load(config_file: &str) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("bot.token", "")?
            .set_default("bot.debug", false)?
            .set_default("bot.parse_mode", "html")?
            .set_default("bot.admin_ids", Vec::<i64>::new())?
            .set_default("logging.level", "info")?
            .add_source(config::File::with_name(config_file).required(false))
            .add_source(
                config::Environment::with_prefix("TRAVELBOT")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("bot.admin_ids"),
            )
            .set_override_option("bot.token", non_empty_env("BOT_TOKEN"))?
            .set_override_option("bot.manager_chat_id", non_empty_env("MANAGER_CHAT_ID"))?
            .set_override_option("bot.debug", non_empty_env("DEBUG_MODE"))?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TravelBotError> {
        super::validation::validate_settings(self)
    }
}

impl BotConfig {
    /// Manager chat, if one is configured
    pub fn manager_chat(&self) -> Option<ChatId> {
        self.manager_chat_id.filter(|id| *id != 0).map(ChatId)
    }

    /// Output format selected by `parse_mode`
    pub fn output_format(&self) -> Result<OutputFormat, crate::utils::errors::TravelBotError> {
        self.parse_mode.parse()
    }

    /// Whether the user may run administrative commands
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.is_empty() || self.admin_ids.contains(&user_id)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                manager_chat_id: None,
                debug: false,
                parse_mode: "html".to_string(),
                admin_ids: vec![],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
