//! RSH Network Shared Library
//!
//! This crate contains the domain models and wire types used across the
//! backend and any future frontend clients.

pub mod models;
pub mod types;

// Re-export commonly used items
pub use models::*;
pub use types::*;
