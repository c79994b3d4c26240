//! Adapter implementations for item ports.

pub mod memory;
pub mod postgres;
