//! User repository - read-only queries for the admin dashboard.
//!
//! The email match predicate (substring/prefix/exact, case sensitivity)
//! is part of the store's contract and comes in via `SearchConfig`
//! rather than being baked into the SQL here.

use crate::{DbError, Result as DbErrorResult};

use dm_config::{MatchMode, SearchConfig};
use dm_core::{User, UserRole};

use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_USER: &str = "SELECT username, email, display_name, role, created_at FROM users";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Total number of user accounts
    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Users whose email satisfies the configured match predicate.
    /// Result order is email ASC and is the order callers must preserve.
    pub async fn find_by_email_match(
        &self,
        search_text: &str,
        search: &SearchConfig,
    ) -> DbErrorResult<Vec<User>> {
        // LIKE is case-insensitive for ASCII in SQLite, so the
        // case-sensitive modes go through instr()/substr() instead.
        let (condition, patterns) = match (search.match_mode, search.case_sensitive) {
            (MatchMode::Exact, true) => ("email = ?", vec![search_text.to_string()]),
            (MatchMode::Exact, false) => {
                ("email = ? COLLATE NOCASE", vec![search_text.to_string()])
            }
            (MatchMode::Prefix, false) => (
                "email LIKE ? ESCAPE '\\'",
                vec![format!("{}%", escape_like(search_text))],
            ),
            (MatchMode::Substring, false) => (
                "email LIKE ? ESCAPE '\\'",
                vec![format!("%{}%", escape_like(search_text))],
            ),
            (MatchMode::Prefix, true) => (
                "substr(email, 1, length(?)) = ?",
                vec![search_text.to_string(), search_text.to_string()],
            ),
            (MatchMode::Substring, true) => {
                ("instr(email, ?) > 0", vec![search_text.to_string()])
            }
        };

        let sql = format!("{SELECT_USER} WHERE {condition} ORDER BY email ASC");

        let mut query = sqlx::query(&sql);
        for pattern in patterns {
            query = query.bind(pattern);
        }

        let rows = query.fetch_all(&self.pool).await?;

        rows.iter().map(user_from_row).collect()
    }
}

/// Escape LIKE wildcards so search text is matched literally
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let role: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(User {
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        role: UserRole::from_str(&role)
            .map_err(|e| DbError::decode(format!("Invalid role in users.role: {}", e)))?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("Invalid timestamp in users.created_at"))?,
    })
}
