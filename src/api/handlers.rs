//! Request handlers shared by every item resource.

use super::{
    dto::{ItemPayload, ItemResponse},
    error::ApiError,
    validation::validate_item,
};
use crate::item::{
    domain::{Item, ItemId, ResourceKind},
    ports::ItemRepository,
    services::ItemService,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

type PathId = Result<Path<i64>, PathRejection>;
type JsonBody = Result<Json<ItemPayload>, JsonRejection>;

fn item_id(path: PathId) -> Result<ItemId, ApiError> {
    let Path(raw) = path?;
    Ok(ItemId::new(raw))
}

/// `GET /{resource}`: lists every item in listing order.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the store fails.
pub async fn list_items<K, R>(
    State(service): State<ItemService<K, R>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError>
where
    K: ResourceKind,
    R: ItemRepository<K> + 'static,
{
    let items = service
        .find_all()
        .await
        .map_err(ApiError::from_service::<K>)?;
    Ok(Json(items.iter().map(ItemResponse::from).collect()))
}

/// `POST /{resource}`: validates the body and inserts a new item.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for an invalid name,
/// [`ApiError::BadRequest`] for an unparseable body, or
/// [`ApiError::Internal`] when the store fails.
pub async fn create_item<K, R>(
    State(service): State<ItemService<K, R>>,
    body: JsonBody,
) -> Result<Json<ItemResponse>, ApiError>
where
    K: ResourceKind,
    R: ItemRepository<K> + 'static,
{
    let Json(payload) = body?;
    let validated = validate_item(payload)?;

    let mut item = Item::<K>::new(validated.name);
    item.set_done(validated.done);

    let saved = service
        .save(item)
        .await
        .map_err(ApiError::from_service::<K>)?;
    tracing::info!(resource = K::PATH, id = ?saved.id(), "item created");
    Ok(Json(ItemResponse::from(&saved)))
}

/// `GET /{resource}/{id}`: returns one item.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no item has the identity.
pub async fn get_item<K, R>(
    State(service): State<ItemService<K, R>>,
    path: PathId,
) -> Result<Json<ItemResponse>, ApiError>
where
    K: ResourceKind,
    R: ItemRepository<K> + 'static,
{
    let id = item_id(path)?;
    let item = service
        .find_by_id(id)
        .await
        .map_err(ApiError::from_service::<K>)?
        .ok_or_else(|| ApiError::not_found::<K>(id))?;
    Ok(Json(ItemResponse::from(&item)))
}

/// `PUT /{resource}/{id}`: renames an existing item.
///
/// Only the name is taken from the body; the completion flag and creation
/// time keep their stored values.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for an invalid name (checked before the
/// lookup) or [`ApiError::NotFound`] when no item has the identity.
pub async fn update_item<K, R>(
    State(service): State<ItemService<K, R>>,
    path: PathId,
    body: JsonBody,
) -> Result<Json<ItemResponse>, ApiError>
where
    K: ResourceKind,
    R: ItemRepository<K> + 'static,
{
    let id = item_id(path)?;
    let Json(payload) = body?;
    let validated = validate_item(payload)?;

    let mut item = service
        .find_by_id(id)
        .await
        .map_err(ApiError::from_service::<K>)?
        .ok_or_else(|| ApiError::not_found::<K>(id))?;
    item.set_name(validated.name);

    let saved = service
        .save(item)
        .await
        .map_err(ApiError::from_service::<K>)?;
    tracing::info!(resource = K::PATH, %id, "item renamed");
    Ok(Json(ItemResponse::from(&saved)))
}

/// `DELETE /{resource}/{id}`: removes an item.
///
/// Deleting an unknown identity also answers 200.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the store fails.
pub async fn delete_item<K, R>(
    State(service): State<ItemService<K, R>>,
    path: PathId,
) -> Result<StatusCode, ApiError>
where
    K: ResourceKind,
    R: ItemRepository<K> + 'static,
{
    let id = item_id(path)?;
    service
        .delete_by_id(id)
        .await
        .map_err(ApiError::from_service::<K>)?;
    tracing::info!(resource = K::PATH, %id, "item deleted");
    Ok(StatusCode::OK)
}
