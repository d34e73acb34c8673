use crate::{Certificate, CertificateStatus, User, UserWithMetrics};

use chrono::Utc;

fn metrics_for(certificate: Option<Certificate>) -> UserWithMetrics {
    UserWithMetrics {
        user: User::new(
            "alice".to_string(),
            "alice@x.com".to_string(),
            "Alice".to_string(),
        ),
        dns_record_count: 4,
        certificate,
    }
}

#[test]
fn test_certificate_status_label_with_certificate() {
    let certificate = Certificate {
        id: 1,
        username: "alice".to_string(),
        domain: "alice.example.com".to_string(),
        status: CertificateStatus::Active,
        valid_from: Some(Utc::now()),
        valid_to: None,
        created_at: Utc::now(),
    };

    let metrics = metrics_for(Some(certificate));
    assert_eq!(metrics.certificate_status_label(), "active");
}

#[test]
fn test_certificate_status_label_not_issued() {
    let metrics = metrics_for(None);
    assert_eq!(metrics.certificate_status_label(), "Not issued");
}
