mod certificate_status;
mod user;
mod user_with_metrics;
