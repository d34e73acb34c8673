use crate::{User, UserRole};

#[test]
fn test_user_new() {
    let user = User::new(
        "alice".to_string(),
        "alice@x.com".to_string(),
        "Alice".to_string(),
    );

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@x.com");
    assert_eq!(user.display_name, "Alice");
    assert_eq!(user.role, UserRole::User);
    assert!(!user.is_admin());
}

#[test]
fn test_user_is_admin() {
    let mut user = User::new(
        "root".to_string(),
        "root@x.com".to_string(),
        "Root".to_string(),
    );

    user.role = UserRole::Admin;
    assert!(user.is_admin());
}

#[test]
fn test_user_role_round_trip() {
    use std::str::FromStr;

    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert_eq!(UserRole::from_str("user").unwrap(), UserRole::User);
    assert_eq!(UserRole::Admin.as_str(), "admin");
    assert!(UserRole::from_str("superuser").is_err());
}
