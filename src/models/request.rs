//! Travel request model
//!
//! The record accumulated while a client answers the questionnaire, and the
//! two renderings of it: the preview shown back to the client and the report
//! delivered to the manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserInfo;
use crate::utils::helpers::{format_timestamp, OutputFormat};
use crate::utils::validators::split_countries;

/// Child age value stored when the travelers answer mentions no children
pub const NO_CHILDREN: &str = "Нет детей";

/// Shown in place of empty answers
const NOT_SPECIFIED: &str = "Не указано";

const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequest {
    pub destination: String,
    pub departure_city: String,
    pub travel_dates: String,
    pub duration: String,
    pub travelers: String,
    pub child_age: Option<String>,
    pub budget: String,
    pub vacation_type: String,
    pub hotel_level: String,
    pub meal_plan: String,
    pub important_factors: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl TravelRequest {
    /// Individual places named in the destination answer
    pub fn countries(&self) -> Vec<String> {
        split_countries(&self.destination)
    }

    /// Labeled answers in questionnaire order
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("🌍 Направление", self.destination.as_str()),
            ("🛫 Город вылета", self.departure_city.as_str()),
            ("📅 Даты поездки", self.travel_dates.as_str()),
            ("⏳ Продолжительность", self.duration.as_str()),
            ("👥 Путешественники", self.travelers.as_str()),
            ("👶 Возраст детей", self.child_age.as_deref().unwrap_or(NO_CHILDREN)),
            ("💰 Бюджет", self.budget.as_str()),
            ("🏖 Тип отдыха", self.vacation_type.as_str()),
            ("🏨 Уровень отеля", self.hotel_level.as_str()),
            ("🍽 Питание", self.meal_plan.as_str()),
            ("⭐ Важные факторы", self.important_factors.as_str()),
        ]
    }

    /// Client-facing summary of the answers
    pub fn render_preview(&self, format: OutputFormat) -> String {
        self.fields()
            .into_iter()
            .map(|(label, value)| format.field(label, display_value(value)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Manager-facing report including the client's identity
    pub fn render_report(&self, user: &UserInfo, format: OutputFormat) -> String {
        let mut lines = vec![
            format.bold("🗺 Новая заявка от клиента!"),
            String::new(),
            format.field("👤 Клиент", &user.full_name()),
        ];

        if let Some(username) = user.username.as_deref().filter(|u| !u.is_empty()) {
            lines.push(format.field("📱 Username", &format!("@{}", username)));
        }
        lines.push(format.field("🆔 ID", &user.id.to_string()));
        lines.push(format.escape(SEPARATOR));

        lines.push(self.render_preview(format));

        let countries = self.countries();
        if countries.len() > 1 {
            lines.push(format.field("🧭 Страны", &countries.join(", ")));
        }

        lines.push(format.escape(SEPARATOR));
        if let Some(created_at) = self.created_at {
            lines.push(format.field("🕒 Время подачи заявки", &format_timestamp(created_at)));
        }

        lines.join("\n")
    }

    /// Fully filled request used by the `/test` diagnostic command
    pub fn synthetic() -> Self {
        Self {
            destination: "Тестовая страна".to_string(),
            departure_city: "Тестовый город".to_string(),
            travel_dates: "тест".to_string(),
            duration: "7 дней".to_string(),
            travelers: "2 взрослых".to_string(),
            child_age: Some(NO_CHILDREN.to_string()),
            budget: "100000 ₽".to_string(),
            vacation_type: "Пляжный".to_string(),
            hotel_level: "4★".to_string(),
            meal_plan: "All Inclusive".to_string(),
            important_factors: "тест".to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

fn display_value(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}
