//! Certificate repository - read-only queries for the admin dashboard.

use crate::{DbError, Result as DbErrorResult};

use dm_core::{Certificate, CertificateStatus};

use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct CertificateRepository {
    pool: SqlitePool,
}

impl CertificateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Total number of certificate orders
    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM certificates")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// The user's most recent certificate order, if any
    pub async fn find_latest_by_username(
        &self,
        username: &str,
    ) -> DbErrorResult<Option<Certificate>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, domain, status, valid_from, valid_to, created_at
                FROM certificates
                WHERE username = ?
                ORDER BY created_at DESC, id DESC
                LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(certificate_from_row).transpose()
    }
}

fn certificate_from_row(row: &SqliteRow) -> DbErrorResult<Certificate> {
    let status: String = row.try_get("status")?;
    let valid_from: Option<i64> = row.try_get("valid_from")?;
    let valid_to: Option<i64> = row.try_get("valid_to")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Certificate {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        domain: row.try_get("domain")?,
        status: CertificateStatus::from_str(&status).map_err(|e| {
            DbError::decode(format!("Invalid status in certificates.status: {}", e))
        })?,
        valid_from: valid_from.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        valid_to: valid_to.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("Invalid timestamp in certificates.created_at"))?,
    })
}
