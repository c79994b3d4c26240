//! Port contracts for item persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by item services.

pub mod repository;

pub use repository::{ItemRepository, ItemRepositoryError, ItemRepositoryResult};
