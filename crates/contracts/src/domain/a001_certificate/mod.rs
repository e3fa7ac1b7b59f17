pub mod aggregate;
pub mod details;

pub use aggregate::Certificate;
pub use details::{describe, CategoryDetail, CertificateCategory, CertificateLevel};
