#![allow(dead_code)]

//! Test infrastructure for dm-server API tests

use dm_config::{AuthConfig, SearchConfig};
use dm_server::AppState;

use chrono::Utc;
use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/dm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing (auth enabled, default search predicate)
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        auth: AuthConfig::default(),
        search: SearchConfig::default(),
    }
}

/// Create AppState with the auth gate disabled (development mode)
pub async fn create_test_app_state_no_auth() -> AppState {
    AppState {
        pool: create_test_pool().await,
        auth: AuthConfig {
            enabled: false,
            ..Default::default()
        },
        search: SearchConfig::default(),
    }
}

/// Create a test user
pub async fn create_test_user(pool: &SqlitePool, username: &str, email: &str) {
    sqlx::query(
        "INSERT INTO users (username, email, display_name, role, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(username)
    .bind(email)
    .bind(format!("Display {}", username))
    .bind("user")
    .bind(Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test user");
}

/// Create `count` DNS records for a user
pub async fn create_test_dns_records(pool: &SqlitePool, username: &str, count: usize) {
    for i in 0..count {
        sqlx::query(
            "INSERT INTO dns_records (username, record_type, name, value, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind("A")
        .bind(format!("{}-{}.example.com", username, i))
        .bind("192.0.2.1")
        .bind(Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to create test dns record");
    }
}

/// Create a certificate for a user
pub async fn create_test_certificate(pool: &SqlitePool, username: &str, status: &str) {
    sqlx::query(
        "INSERT INTO certificates (username, domain, status, valid_from, valid_to, created_at) VALUES (?, ?, ?, NULL, NULL, ?)",
    )
    .bind(username)
    .bind(format!("{}.example.com", username))
    .bind(status)
    .bind(Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test certificate");
}
