//! Dashboard metrics handler
//!
//! Serves the three global counts rendered as metric cards on every
//! page view. They do not depend on each other, so they are fetched
//! concurrently; any failure fails the whole page load.

use crate::app_state::AppState;
use crate::{AdminUser, ApiResult, MetricsResponse};

use dm_db::{CertificateRepository, DnsRecordRepository, UserRepository};

use axum::{Json, extract::State};

/// GET /api/v1/admin/metrics
pub async fn get_metrics(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> ApiResult<Json<MetricsResponse>> {
    log::debug!("Dashboard metrics requested by {}", admin);

    let users = UserRepository::new(state.pool.clone());
    let dns_records = DnsRecordRepository::new(state.pool.clone());
    let certificates = CertificateRepository::new(state.pool.clone());

    let (user_count, dns_record_count, certificate_count) =
        tokio::try_join!(users.count(), dns_records.count(), certificates.count())?;

    Ok(Json(MetricsResponse {
        user_count,
        dns_record_count,
        certificate_count,
    }))
}
