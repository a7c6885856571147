//! Test data helpers for creating test objects
//!
//! Telegram types are built from JSON the same way the dispatcher receives
//! them, which keeps the helpers independent of teloxide struct layouts.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use teloxide::types::{CallbackQuery, Message};
use tokio::sync::Mutex;

use travel_bot::config::Settings;
use travel_bot::models::{TravelRequest, UserInfo};
use travel_bot::services::{Notifier, ServiceFactory};
use travel_bot::state::InMemorySessionStore;
use travel_bot::utils::errors::{NotifyError, NotifyResult};

use super::telegram_mock::TEST_TOKEN;

pub const TEST_USER_ID: i64 = 100;
pub const MANAGER_CHAT_ID: i64 = -1001234567890;

fn user_json(user_id: i64) -> Value {
    json!({
        "id": user_id,
        "is_bot": false,
        "first_name": "Анна",
        "last_name": "Петрова",
        "username": "anna_p",
        "language_code": "ru"
    })
}

fn message_json(user_id: i64, message_id: i32) -> Value {
    json!({
        "message_id": message_id,
        "date": 1640995200,
        "chat": {
            "id": user_id,
            "type": "private",
            "first_name": "Анна",
            "last_name": "Петрова",
            "username": "anna_p"
        },
        "from": user_json(user_id)
    })
}

/// Sample user as the bot sees it
pub fn test_user(user_id: i64) -> UserInfo {
    UserInfo {
        id: user_id,
        first_name: "Анна".to_string(),
        last_name: Some("Петрова".to_string()),
        username: Some("anna_p".to_string()),
    }
}

/// Private text message from the given user
pub fn create_test_message(user_id: i64, text: &str) -> Message {
    let mut value = message_json(user_id, 1);
    value["text"] = json!(text);
    serde_json::from_value(value).expect("valid message json")
}

/// Private message carrying a location instead of text
pub fn create_location_message(user_id: i64) -> Message {
    let mut value = message_json(user_id, 2);
    value["location"] = json!({ "latitude": 55.75, "longitude": 37.61 });
    serde_json::from_value(value).expect("valid message json")
}

/// Callback query attached to a bot message
pub fn create_callback_query(user_id: i64, data: &str, message_id: i32) -> CallbackQuery {
    let mut message = message_json(user_id, message_id);
    message["from"] = json!({
        "id": 12345,
        "is_bot": true,
        "first_name": "TestBot",
        "username": "test_bot"
    });
    message["text"] = json!("Шаг 8 из 10: Какой уровень отеля вы предпочитаете?");

    serde_json::from_value(json!({
        "id": format!("cb-{}", message_id),
        "from": user_json(user_id),
        "chat_instance": "test-instance",
        "message": message,
        "data": data
    }))
    .expect("valid callback json")
}

/// Settings pointing at the test bot and manager chat
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = TEST_TOKEN.to_string();
    settings.bot.manager_chat_id = Some(MANAGER_CHAT_ID);
    settings
}

/// Notifier that records every delivered request
#[derive(Default)]
pub struct RecordingNotifier {
    pub delivered: Mutex<Vec<(TravelRequest, UserInfo)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, request: &TravelRequest, user: &UserInfo) -> NotifyResult<()> {
        self.delivered.lock().await.push((request.clone(), user.clone()));
        Ok(())
    }
}

/// Notifier whose manager chat does not exist
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn deliver(&self, _request: &TravelRequest, _user: &UserInfo) -> NotifyResult<()> {
        Err(NotifyError::ChatNotFound)
    }
}

/// Services backed by a fresh in-memory store and the given notifier
pub fn services_with(settings: Settings, notifier: Arc<dyn Notifier>) -> ServiceFactory {
    ServiceFactory::with_components(settings, Arc::new(InMemorySessionStore::new()), notifier)
        .expect("valid test settings")
}
