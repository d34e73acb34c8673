use crate::CertificateStatus;

use std::str::FromStr;

#[test]
fn test_certificate_status_from_str() {
    assert_eq!(
        CertificateStatus::from_str("pending").unwrap(),
        CertificateStatus::Pending
    );
    assert_eq!(
        CertificateStatus::from_str("active").unwrap(),
        CertificateStatus::Active
    );
    assert_eq!(
        CertificateStatus::from_str("expired").unwrap(),
        CertificateStatus::Expired
    );
    assert_eq!(
        CertificateStatus::from_str("revoked").unwrap(),
        CertificateStatus::Revoked
    );
}

#[test]
fn test_certificate_status_rejects_unknown() {
    let err = CertificateStatus::from_str("issued").unwrap_err();
    assert!(err.to_string().contains("issued"));
}

#[test]
fn test_certificate_status_as_str() {
    assert_eq!(CertificateStatus::Active.as_str(), "active");
    assert_eq!(CertificateStatus::Pending.as_str(), "pending");
}
