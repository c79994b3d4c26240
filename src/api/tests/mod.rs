//! Unit tests for the HTTP boundary.

mod error_tests;
