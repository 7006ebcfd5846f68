//! User Model

use serde::{Deserialize, Serialize};

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Waiter,
    Chef,
    Cashier,
    Admin,
}

/// Authenticated staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    /// Entity (restaurant branch) the user is signed into
    #[serde(default)]
    pub entity_id: Option<String>,
    /// Entity display name
    #[serde(default)]
    pub entity: Option<String>,
}

/// Entity (restaurant branch) selectable at login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
}
