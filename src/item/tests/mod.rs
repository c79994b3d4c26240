//! Unit tests for the item module.

#[path = "../../../tests/test_helpers/stepping_clock.rs"]
mod stepping_clock;
