use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Client,
    Freelancer,
}

impl UserRole {
    pub fn to_str(&self) -> &str {
        match self {
            UserRole::Client => "client",
            UserRole::Freelancer => "freelancer",
        }
    }
}

// The profile id doubles as the identity-provider user id; credentials are
// issued and resolved outside this service.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Profile {
    pub id: Uuid,
    pub role: UserRole,
    pub full_name: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub hourly_rate: Option<i64>,
    pub portfolio_url: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::Freelancer).unwrap(),
            "\"freelancer\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"client\"").unwrap(),
            UserRole::Client
        );
    }
}
