//! Shared world state for item lifecycle BDD scenarios.

use crate::test_helpers::{TestResponse, memory_app, send};
use axum::{Router, http::Method};
use rstest::fixture;
use serde_json::Value;

/// Scenario world holding the application and the latest response.
pub struct ItemLifecycleWorld {
    pub app: Router,
    pub last_response: Option<TestResponse>,
}

impl ItemLifecycleWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: memory_app(),
            last_response: None,
        }
    }

    /// Sends a request and records the response as the latest one.
    pub fn request(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<&TestResponse, eyre::Report> {
        let response = run_async(send(&self.app, method, uri, body))?;
        Ok(self.last_response.insert(response))
    }

    /// Returns the latest response.
    pub fn last(&self) -> Result<&TestResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no request has been sent in this scenario"))
    }
}

impl Default for ItemLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ItemLifecycleWorld {
    ItemLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
