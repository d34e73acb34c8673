//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::app_state::AppState;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// The admin identity resolved by the upstream authentication gate.
///
/// The gate (session middleware, reverse proxy, ...) runs before this
/// service and forwards the caller in the `X-Admin-User` header. With
/// auth disabled (development mode) the configured default identity is
/// used instead.
pub struct AdminUser(pub String);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(header_value) = parts.headers.get("X-Admin-User") {
                if let Ok(username) = header_value.to_str() {
                    if !username.is_empty() {
                        log::debug!("Using admin identity from X-Admin-User header: {}", username);
                        return Ok(AdminUser(username.to_string()));
                    }
                }
                log::warn!("Invalid X-Admin-User header value");
            }

            if !state.auth.enabled {
                log::debug!(
                    "Auth disabled, using default admin: {}",
                    state.auth.default_admin
                );
                return Ok(AdminUser(state.auth.default_admin.clone()));
            }

            Err(ApiError::Unauthorized {
                message: "Missing X-Admin-User header".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
