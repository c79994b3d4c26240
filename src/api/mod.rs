//! HTTP boundary for item resources.
//!
//! Each [`ResourceKind`] is served under `/{PATH}` with the same five routes;
//! [`app`] merges the task and todo resources and adds CORS and request
//! tracing.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod validation;

#[cfg(test)]
mod tests;

use crate::item::{
    domain::{ResourceKind, Task, Todo},
    ports::ItemRepository,
    services::ItemService,
};
use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use dto::{ItemPayload, ItemResponse};
pub use error::{ApiError, ErrorBody};
pub use validation::{ValidatedItem, ValidationErrors, validate_item};

/// Builds the routes for one resource kind.
///
/// | Method | Path |
/// |---|---|
/// | `GET`, `POST` | `/{PATH}` |
/// | `GET`, `PUT`, `DELETE` | `/{PATH}/{id}` |
pub fn resource_router<K, R>(service: ItemService<K, R>) -> Router
where
    K: ResourceKind,
    R: ItemRepository<K> + 'static,
{
    let collection = format!("/{}", K::PATH);
    let member = format!("/{}/{{id}}", K::PATH);

    Router::new()
        .route(
            &collection,
            get(handlers::list_items::<K, R>).post(handlers::create_item::<K, R>),
        )
        .route(
            &member,
            get(handlers::get_item::<K, R>)
                .put(handlers::update_item::<K, R>)
                .delete(handlers::delete_item::<K, R>),
        )
        .with_state(service)
}

/// Builds the full application: task and todo resources, permissive CORS,
/// and per-request tracing spans.
pub fn app<TR, DR>(tasks: ItemService<Task, TR>, todos: ItemService<Todo, DR>) -> Router
where
    TR: ItemRepository<Task> + 'static,
    DR: ItemRepository<Todo> + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(resource_router(tasks))
        .merge(resource_router(todos))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
