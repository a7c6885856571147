//! User model

use serde::{Deserialize, Serialize};

/// Snapshot of the Telegram identity of the client filling in a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl UserInfo {
    /// First and last name joined with a space
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last_name) if !last_name.is_empty() => format!("{} {}", self.first_name, last_name),
            _ => self.first_name.clone(),
        }
    }
}

impl From<&teloxide::types::User> for UserInfo {
    fn from(user: &teloxide::types::User) -> Self {
        Self {
            id: user.id.0 as i64,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let mut user = UserInfo {
            id: 1,
            first_name: "Анна".to_string(),
            last_name: Some("Иванова".to_string()),
            username: None,
        };
        assert_eq!(user.full_name(), "Анна Иванова");

        user.last_name = None;
        assert_eq!(user.full_name(), "Анна");
    }
}
