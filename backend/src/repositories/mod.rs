//! Store repositories
//!
//! Data access layer; one repository per collection. All queries run
//! through the store handle's deadline.

pub mod appointment;
pub mod catalog;
pub mod consultant;
pub mod review;
pub mod user;

pub use appointment::{AppointmentRecord, AppointmentRepository};
pub use catalog::{CatalogRepository, PackageRecord, ServiceRecord};
pub use consultant::{ConsultantRecord, ConsultantRepository};
pub use review::{ReviewRecord, ReviewRepository};
pub use user::{UserRecord, UserRepository};
