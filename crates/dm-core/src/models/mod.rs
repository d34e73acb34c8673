pub mod certificate;
pub mod certificate_status;
pub mod user;
pub mod user_role;
pub mod user_with_metrics;
