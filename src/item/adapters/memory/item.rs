//! In-memory repository for items.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::item::{
    domain::{Item, ItemId, ResourceKind, listing_order},
    ports::{ItemRepository, ItemRepositoryError, ItemRepositoryResult},
};

/// Thread-safe in-memory item repository.
///
/// Identities come from a per-repository counter starting at 1 and are never
/// reused, even after deletion.
pub struct InMemoryItemRepository<K, C = DefaultClock>
where
    K: ResourceKind,
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryItemState<K>>>,
    clock: Arc<C>,
}

struct InMemoryItemState<K> {
    items: BTreeMap<ItemId, Item<K>>,
    last_id: i64,
}

impl<K> Default for InMemoryItemState<K> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<K> InMemoryItemState<K> {
    const fn next_id(&mut self) -> ItemId {
        self.last_id += 1;
        ItemId::new(self.last_id)
    }
}

impl<K: ResourceKind> InMemoryItemRepository<K> {
    /// Creates an empty repository stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl<K: ResourceKind> Default for InMemoryItemRepository<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> InMemoryItemRepository<K, C>
where
    K: ResourceKind,
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamped by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryItemState::default())),
            clock,
        }
    }
}

impl<K, C> Clone for InMemoryItemRepository<K, C>
where
    K: ResourceKind,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<K, C> fmt::Debug for InMemoryItemRepository<K, C>
where
    K: ResourceKind,
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryItemRepository")
            .field("resource", &K::PATH)
            .finish_non_exhaustive()
    }
}

fn lock_error(err: impl fmt::Display) -> ItemRepositoryError {
    ItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<K, C> ItemRepository<K> for InMemoryItemRepository<K, C>
where
    K: ResourceKind,
    C: Clock + Send + Sync,
{
    async fn find_all(&self) -> ItemRepositoryResult<Vec<Item<K>>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut items: Vec<Item<K>> = state.items.values().cloned().collect();
        items.sort_by(listing_order);
        Ok(items)
    }

    async fn find_by_id(&self, id: ItemId) -> ItemRepositoryResult<Option<Item<K>>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.items.get(&id).cloned())
    }

    async fn save(&self, item: Item<K>) -> ItemRepositoryResult<Item<K>> {
        let mut saved = item;
        let mut state = self.state.write().map_err(lock_error)?;
        let now = self.clock.utc();

        let id = match saved.id() {
            None => {
                let id = state.next_id();
                saved.record_insert(id, now);
                id
            }
            Some(id) => {
                let stored = state
                    .items
                    .get(&id)
                    .ok_or(ItemRepositoryError::NotFound(id))?;
                saved.record_update(stored.created_at(), now);
                id
            }
        };

        state.items.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: ItemId) -> ItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.items.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> ItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.items.clear();
        Ok(())
    }
}
