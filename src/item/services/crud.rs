//! Service layer for item creation, lookup, update, and removal.
//!
//! The service delegates each call to exactly one repository operation. It
//! is the seam where item business rules belong; today there are none.

use crate::item::{
    domain::{Item, ItemId, ResourceKind},
    ports::{ItemRepository, ItemRepositoryError},
};
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for item operations.
#[derive(Debug, Error)]
pub enum ItemServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ItemRepositoryError),
}

/// Result type for item service operations.
pub type ItemServiceResult<T> = Result<T, ItemServiceError>;

/// Item orchestration service for resource kind `K`.
pub struct ItemService<K, R>
where
    K: ResourceKind,
    R: ItemRepository<K>,
{
    repository: Arc<R>,
    kind: PhantomData<fn() -> K>,
}

impl<K, R> Clone for ItemService<K, R>
where
    K: ResourceKind,
    R: ItemRepository<K>,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            kind: PhantomData,
        }
    }
}

impl<K, R> ItemService<K, R>
where
    K: ResourceKind,
    R: ItemRepository<K>,
{
    /// Creates a new item service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            kind: PhantomData,
        }
    }

    /// Returns every item in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::Repository`] when the lookup fails.
    pub async fn find_all(&self) -> ItemServiceResult<Vec<Item<K>>> {
        Ok(self.repository.find_all().await?)
    }

    /// Inserts a new item or updates an existing one, returning the
    /// persisted form with identity and timestamps populated.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::Repository`] when persistence fails or the
    /// item to update no longer exists.
    pub async fn save(&self, item: Item<K>) -> ItemServiceResult<Item<K>> {
        Ok(self.repository.save(item).await?)
    }

    /// Finds an item by identity.
    ///
    /// Returns `Ok(None)` when the item does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: ItemId) -> ItemServiceResult<Option<Item<K>>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Removes an item. Removing an unknown identity succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::Repository`] when persistence fails.
    pub async fn delete_by_id(&self, id: ItemId) -> ItemServiceResult<()> {
        Ok(self.repository.delete_by_id(id).await?)
    }

    /// Removes every item of this kind.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::Repository`] when persistence fails.
    pub async fn delete_all(&self) -> ItemServiceResult<()> {
        Ok(self.repository.delete_all().await?)
    }
}
