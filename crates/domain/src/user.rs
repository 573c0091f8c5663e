//! User entity as returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub phone: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_trips: u32,
    #[serde(default)]
    pub total_ratings: u32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Display name, falling back to the phone number.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.phone)
    }
}
