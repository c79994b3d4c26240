//! Named, completable items exposed as REST resources.
//!
//! Tasks and todos share one contract: a persisted record with an identity,
//! a name, and a completion flag, where tasks additionally carry creation and
//! modification timestamps. The module is generic over a
//! [`domain::ResourceKind`] marker instead of duplicating types per resource,
//! and follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
