use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user row directly
pub async fn insert_user(pool: &SqlitePool, username: &str, email: &str) {
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
    .expect("Failed to insert test user");
}

/// Inserts `count` DNS records for a user
pub async fn insert_dns_records(pool: &SqlitePool, username: &str, count: usize) {
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
        .expect("Failed to insert test dns record");
    }
}

/// Inserts a certificate row, returns its id
pub async fn insert_certificate(
    pool: &SqlitePool,
    username: &str,
    status: &str,
    created_at: i64,
) -> i64 {
    let result = sqlx::query(
        "INSERT INTO certificates (username, domain, status, valid_from, valid_to, created_at) VALUES (?, ?, ?, NULL, NULL, ?)",
    )
    .bind(username)
    .bind(format!("{}.example.com", username))
    .bind(status)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to insert test certificate");

    result.last_insert_rowid()
}
