//! Error status codes and bodies.

use crate::api::{
    error::ApiError,
    validation::{NAME_MANDATORY, ValidationErrors},
};
use crate::item::{
    domain::{ItemId, Task, Todo},
    ports::ItemRepositoryError,
    services::ItemServiceError,
};
use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};

async fn render(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body is readable")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("body is JSON");
    (status, body)
}

#[rstest]
#[tokio::test]
async fn not_found_names_the_resource_kind() {
    let (status, body) = render(ApiError::not_found::<Task>(ItemId::new(4))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "TASK with id 4 not found." }));

    let (_, body) = render(ApiError::not_found::<Todo>(ItemId::new(12))).await;
    assert_eq!(body, json!({ "error": "TODO with id 12 not found." }));
}

#[rstest]
#[tokio::test]
async fn validation_failure_is_a_field_map() {
    let error = ApiError::from(ValidationErrors::single("name", NAME_MANDATORY));
    let (status, body) = render(error).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "name": "Name is mandatory" }));
}

#[rstest]
#[tokio::test]
async fn store_failure_hides_details() {
    let source = ItemRepositoryError::persistence(std::io::Error::other("disk on fire"));
    let error = ApiError::from_service::<Task>(ItemServiceError::from(source));

    let (status, body) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "internal server error" }));
}

#[rstest]
fn vanished_row_maps_to_not_found() {
    let source = ItemRepositoryError::NotFound(ItemId::new(3));
    let error = ApiError::from_service::<Todo>(ItemServiceError::from(source));

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
    assert_eq!(error.to_string(), "TODO with id 3 not found.");
}

#[rstest]
fn bad_request_carries_its_reason() {
    let error = ApiError::BadRequest("expected value at line 1".to_owned());
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.to_string(), "expected value at line 1");
}
