//! DNS record repository. The dashboard only consumes counts, so no
//! row-to-entity mapping lives here.

use crate::Result as DbErrorResult;

use sqlx::SqlitePool;

pub struct DnsRecordRepository {
    pool: SqlitePool,
}

impl DnsRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Total number of DNS records across all users
    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dns_records")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Number of DNS records owned by one user
    pub async fn count_by_username(&self, username: &str) -> DbErrorResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dns_records WHERE username = ?")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
