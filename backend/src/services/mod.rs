//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the HTTP layer.

pub mod review;
pub mod user;

pub use review::{ReviewOutcome, ReviewService};
pub use user::{RegistrationOutcome, UserService};
