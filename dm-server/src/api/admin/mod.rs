pub mod metrics;
pub mod metrics_response;
pub mod user_dto;
pub mod user_search_request;
pub mod user_search_response;
pub mod users;
