//! User search handler
//!
//! The search action behind the admin table's search-as-you-type form.
//! Input shorter than the minimum is a soft failure: it yields an empty
//! result set, not an error, and the UI shows its instruction text.

use crate::app_state::AppState;
use crate::{AdminUser, ApiResult, UserSearchRequest, UserSearchResponse, UserWithMetricsDto};

use dm_core::{MIN_SEARCH_TEXT_LEN, User, UserWithMetrics};
use dm_db::{CertificateRepository, DbError, DnsRecordRepository, UserRepository};

use std::collections::HashMap;

use axum::{Form, Json, extract::State};
use futures::future::try_join_all;
use sqlx::SqlitePool;

/// POST /api/v1/admin/users/search
pub async fn search_users(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Form(request): Form<UserSearchRequest>,
) -> ApiResult<Json<UserSearchResponse>> {
    let seq = request.seq.unwrap_or(0);
    let search_text = request.search_text.as_deref().unwrap_or("");

    if search_text.chars().count() < MIN_SEARCH_TEXT_LEN {
        // Soft validation failure: too little input to search on
        return Ok(Json(UserSearchResponse {
            seq,
            users: Vec::new(),
        }));
    }

    log::debug!("User search by {}: {:?}", admin, search_text);

    let users = UserRepository::new(state.pool.clone())
        .find_by_email_match(search_text, &state.search)
        .await?;

    let enriched = attach_metrics(&state.pool, users).await?;

    Ok(Json(UserSearchResponse {
        seq,
        users: enriched.into_iter().map(UserWithMetricsDto::from).collect(),
    }))
}

/// Fan out one concurrent metric pair per user, join all of them, then
/// merge by username key. The merge never relies on completion order,
/// and the output keeps the order the user query returned.
async fn attach_metrics(
    pool: &SqlitePool,
    users: Vec<User>,
) -> Result<Vec<UserWithMetrics>, DbError> {
    let dns_records = DnsRecordRepository::new(pool.clone());
    let certificates = CertificateRepository::new(pool.clone());

    let metrics = try_join_all(users.iter().map(|user| {
        let dns_records = &dns_records;
        let certificates = &certificates;
        async move {
            // The two lookups touch disjoint tables, run them together
            let (dns_record_count, certificate) = tokio::try_join!(
                dns_records.count_by_username(&user.username),
                certificates.find_latest_by_username(&user.username)
            )?;

            Ok::<_, DbError>((user.username.clone(), (dns_record_count, certificate)))
        }
    }))
    .await?;

    let mut by_username: HashMap<_, _> = metrics.into_iter().collect();

    Ok(users
        .into_iter()
        .map(|user| {
            let (dns_record_count, certificate) =
                by_username.remove(&user.username).unwrap_or((0, None));

            UserWithMetrics {
                user,
                dns_record_count,
                certificate,
            }
        })
        .collect())
}
