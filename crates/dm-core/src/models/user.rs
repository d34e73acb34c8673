//! User entity - identity record owned by the identity store.

use crate::UserRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account. Keyed by username; DNS records and certificates
/// reference it by that key. This slice never mutates users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, display_name: String) -> Self {
        Self {
            username,
            email,
            display_name,
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
