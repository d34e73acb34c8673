pub mod certificate_repository;
pub mod dns_record_repository;
pub mod user_repository;
