pub mod error;
pub mod models;
pub mod view;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::certificate::Certificate;
pub use models::certificate_status::CertificateStatus;
pub use models::user::User;
pub use models::user_role::UserRole;
pub use models::user_with_metrics::UserWithMetrics;
pub use view::search_sequence::SearchSequence;
pub use view::table_state::TableState;
pub use view::MIN_SEARCH_TEXT_LEN;
