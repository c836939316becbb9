use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Record, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    PlatformAdmin,
    Support,
    Finance,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::PlatformAdmin, UserRole::Support, UserRole::Finance];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::PlatformAdmin => "PLATFORM_ADMIN",
            UserRole::Support => "SUPPORT",
            UserRole::Finance => "FINANCE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::PlatformAdmin => "Platform Admin",
            UserRole::Support => "Support",
            UserRole::Finance => "Finance",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of the platform team (not a tenant user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Record for PlatformUser {
    const NAME: &'static str = "user";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "email",
        "name",
        "role",
        "last_login",
        "created_at",
        "is_active",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            "id" => Value::from(&self.id),
            "email" => Value::from(&self.email),
            "name" => Value::from(&self.name),
            "role" => Value::from(self.role.as_str()),
            "last_login" => Value::from(self.last_login),
            "created_at" => Value::from(self.created_at),
            "is_active" => Value::from(self.is_active),
            _ => return None,
        })
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}
