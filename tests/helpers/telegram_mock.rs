//! Mock Telegram API Server for testing
//!
//! Wraps a wiremock server that answers the handful of Bot API methods the
//! bot calls, and exposes the recorded request bodies for assertions.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_TOKEN: &str = "12345:test_token";

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl MockResponseConfig {
    /// Telegram error response with the given code and description
    pub fn api_error(code: u16, description: &str) -> Self {
        Self {
            success: false,
            delay_ms: None,
            custom_response: Some(json!({
                "ok": false,
                "error_code": code,
                "description": description
            })),
        }
    }

    fn status(&self) -> u16 {
        if self.success {
            return 200;
        }
        self.custom_response
            .as_ref()
            .and_then(|body| body["error_code"].as_u64())
            .map(|code| code as u16)
            .unwrap_or(400)
    }
}

/// teloxide sends method names in PascalCase (`SendMessage`); Telegram treats
/// method names case-insensitively, so map the camelCase API names to the wire form.
fn api_path(api_method: &str) -> String {
    let mut chars = api_method.chars();
    let wire_method: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("/bot{}/{}", TEST_TOKEN, wire_method)
}

fn message_result(text: &str) -> Value {
    json!({
        "message_id": 123,
        "from": {
            "id": 12345,
            "is_bot": true,
            "first_name": "TestBot",
            "username": "test_bot"
        },
        "chat": {
            "id": 100,
            "first_name": "Test",
            "type": "private"
        },
        "date": 1640995200,
        "text": text
    })
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot pointed at this server
    pub fn bot(&self) -> Bot {
        let url = url::Url::parse(&self.server.uri()).expect("mock server uri");
        Bot::new(TEST_TOKEN).set_api_url(url)
    }

    async fn mount(&self, api_method: &str, config: MockResponseConfig, success_body: Value) {
        let status = config.status();
        let body = config.custom_response.clone().unwrap_or_else(|| {
            if config.success {
                success_body
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request"
                })
            }
        });

        let mut response = ResponseTemplate::new(status).set_body_json(body);
        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path(api_path(api_method)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        self.mount("sendMessage", config, json!({ "ok": true, "result": message_result("Test message") }))
            .await;
    }

    /// Setup mock for editMessageText endpoint
    pub async fn mock_edit_message_text(&self, config: MockResponseConfig) {
        let mut result = message_result("Edited test message");
        result["edit_date"] = json!(1640995260);
        self.mount("editMessageText", config, json!({ "ok": true, "result": result }))
            .await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self, config: MockResponseConfig) {
        self.mount("answerCallbackQuery", config, json!({ "ok": true, "result": true }))
            .await;
    }

    /// Setup mock for getMe endpoint
    pub async fn mock_get_me(&self, config: MockResponseConfig) {
        let me = json!({
            "ok": true,
            "result": {
                "id": 12345,
                "is_bot": true,
                "first_name": "TestBot",
                "username": "test_bot",
                "can_join_groups": true,
                "can_read_all_group_messages": false,
                "supports_inline_queries": false,
                "can_connect_to_business": false,
                "has_main_web_app": false
            }
        });
        self.mount("getMe", config, me).await;
    }

    /// Setup every endpoint the bot uses with successful responses
    pub async fn setup_all_endpoints(&self) {
        self.mock_send_message(MockResponseConfig::default()).await;
        self.mock_edit_message_text(MockResponseConfig::default()).await;
        self.mock_answer_callback_query(MockResponseConfig::default()).await;
        self.mock_get_me(MockResponseConfig::default()).await;
    }

    /// JSON bodies of every request received for the given API method
    pub async fn requests_for(&self, api_method: &str) -> Vec<Value> {
        let expected = api_path(api_method);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == expected)
            .filter_map(|request| request.body_json::<Value>().ok())
            .collect()
    }

    /// Texts of every sendMessage call
    pub async fn sent_texts(&self) -> Vec<String> {
        self.requests_for("sendMessage")
            .await
            .into_iter()
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }
}
