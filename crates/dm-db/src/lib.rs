pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::certificate_repository::CertificateRepository;
pub use repositories::dns_record_repository::DnsRecordRepository;
pub use repositories::user_repository::UserRepository;
