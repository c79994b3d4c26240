//! Repository port for item persistence and lookup.

use crate::item::domain::{Item, ItemId, ResourceKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for item repository operations.
pub type ItemRepositoryResult<T> = Result<T, ItemRepositoryError>;

/// Item persistence contract for resource kind `K`.
///
/// Implementations assign identities on first insert and stamp timestamps
/// for kinds where [`ResourceKind::TIMESTAMPED`] holds. Each call is a single
/// atomic unit against the store.
#[async_trait]
pub trait ItemRepository<K: ResourceKind>: Send + Sync {
    /// Returns every stored item in listing order.
    ///
    /// See [`crate::item::domain::listing_order`].
    async fn find_all(&self) -> ItemRepositoryResult<Vec<Item<K>>>;

    /// Finds an item by identity.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_by_id(&self, id: ItemId) -> ItemRepositoryResult<Option<Item<K>>>;

    /// Inserts the item when it has no identity, otherwise updates the row
    /// with the same identity. Returns the persisted form.
    ///
    /// # Errors
    ///
    /// Returns [`ItemRepositoryError::NotFound`] when updating an identity
    /// that is not stored.
    async fn save(&self, item: Item<K>) -> ItemRepositoryResult<Item<K>>;

    /// Removes the item with the given identity.
    ///
    /// Removing an identity that is not stored succeeds without effect.
    async fn delete_by_id(&self, id: ItemId) -> ItemRepositoryResult<()>;

    /// Removes every stored item of this kind.
    async fn delete_all(&self) -> ItemRepositoryResult<()>;
}

/// Errors returned by item repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ItemRepositoryError {
    /// The item to update was not found.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ItemRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
