//! Certificate entity - TLS certificate issued for a user's subdomain.

use crate::CertificateStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A certificate order for a user's domain. The admin dashboard only
/// ever reads the most recent one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub username: String,
    pub domain: String,
    pub status: CertificateStatus,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Certificate {
    pub fn is_active(&self) -> bool {
        self.status == CertificateStatus::Active
    }
}
