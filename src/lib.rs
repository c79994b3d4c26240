//! Taskboard: task and todo REST resources.
//!
//! This crate serves two resources, `/task` and `/todo`, that share one
//! create/read/update/delete contract over a named, completable item.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure item model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` stores
//! - **API**: axum handlers performing validation and error mapping
//!
//! # Modules
//!
//! - [`item`]: Item model, repository port, stores, and service
//! - [`api`]: HTTP routes, request validation, and error responses
//! - [`config`]: Environment-driven runtime configuration
//! - [`seed`]: Demo data for a fresh store

pub mod api;
pub mod config;
pub mod item;
pub mod seed;
