pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    admin::{
        metrics::get_metrics,
        metrics_response::MetricsResponse,
        user_dto::{CertificateDto, UserWithMetricsDto},
        user_search_request::UserSearchRequest,
        user_search_response::UserSearchResponse,
        users::search_users,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::admin_user::AdminUser,
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
