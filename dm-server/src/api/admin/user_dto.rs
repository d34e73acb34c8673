use dm_core::{Certificate, UserWithMetrics};

use serde::Serialize;

/// Row of the admin users table
#[derive(Debug, Serialize)]
pub struct UserWithMetricsDto {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub dns_record_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificateDto>,
    /// Certificate column text ("Not issued" when absent)
    pub certificate_status: String,
}

#[derive(Debug, Serialize)]
pub struct CertificateDto {
    pub id: i64,
    pub domain: String,
    pub status: String,
    pub valid_from: Option<i64>,
    pub valid_to: Option<i64>,
}

impl From<UserWithMetrics> for UserWithMetricsDto {
    fn from(m: UserWithMetrics) -> Self {
        let certificate_status = m.certificate_status_label().to_string();

        Self {
            username: m.user.username,
            email: m.user.email,
            display_name: m.user.display_name,
            role: m.user.role.as_str().to_string(),
            dns_record_count: m.dns_record_count,
            certificate: m.certificate.map(CertificateDto::from),
            certificate_status,
        }
    }
}

impl From<Certificate> for CertificateDto {
    fn from(c: Certificate) -> Self {
        Self {
            id: c.id,
            domain: c.domain,
            status: c.status.as_str().to_string(),
            valid_from: c.valid_from.map(|dt| dt.timestamp()),
            valid_to: c.valid_to.map(|dt| dt.timestamp()),
        }
    }
}
