//! Shared helpers for integration tests.

mod stepping_clock;

pub use stepping_clock::SteppingClock;

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use eyre::WrapErr;
use http_body_util::BodyExt;
use serde_json::Value;
use taskboard::{
    api,
    item::{
        adapters::memory::InMemoryItemRepository,
        domain::{Task, Todo},
        services::ItemService,
    },
};
use tower::ServiceExt;

/// Builds the full application over empty in-memory stores.
///
/// Both stores share one stepping clock so modification order is strict.
pub fn memory_app() -> Router {
    let clock = Arc::new(SteppingClock::default());
    let tasks = InMemoryItemRepository::<Task, SteppingClock>::with_clock(Arc::clone(&clock));
    let todos = InMemoryItemRepository::<Todo, SteppingClock>::with_clock(clock);
    api::app(
        ItemService::new(Arc::new(tasks)),
        ItemService::new(Arc::new(todos)),
    )
}

/// Captured response from a one-shot request.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parses the body as JSON.
    pub fn json(&self) -> eyre::Result<Value> {
        serde_json::from_slice(&self.body).wrap_err_with(|| {
            format!(
                "response body is not JSON: {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }
}

/// Sends one request with an optional raw body through a clone of `app`.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> eyre::Result<TestResponse> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(raw) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_owned())),
        None => builder.body(Body::empty()),
    }
    .wrap_err("build request")?;

    let response = app
        .clone()
        .oneshot(request)
        .await
        .wrap_err("route request")?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .wrap_err("read response body")?
        .to_bytes();

    Ok(TestResponse {
        status,
        headers,
        body,
    })
}

/// Sends one request with an optional JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> eyre::Result<TestResponse> {
    let raw = body.map(|value| value.to_string());
    send_raw(app, method, uri, raw.as_deref()).await
}
