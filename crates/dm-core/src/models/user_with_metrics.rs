//! User enriched with per-user dashboard metrics.

use crate::{Certificate, User};

use serde::{Deserialize, Serialize};

/// A user plus the derived metrics the admin table displays.
/// Built fresh for every search request, never persisted.
///
/// Invariant: `dns_record_count` and `certificate` belong to the same
/// username as `user`. The aggregation step merges by username key, so a
/// reordered fetch can never misattach metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithMetrics {
    pub user: User,
    pub dns_record_count: i64,
    pub certificate: Option<Certificate>,
}

impl UserWithMetrics {
    /// Certificate column text: the status, or "Not issued" when the user
    /// has never ordered one.
    pub fn certificate_status_label(&self) -> &'static str {
        match &self.certificate {
            Some(certificate) => certificate.status.as_str(),
            None => "Not issued",
        }
    }
}
