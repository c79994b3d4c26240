//! `PostgreSQL` repository implementation for item storage.

use super::models::{ItemChanges, ItemRow, NewItemRow};
use super::tables::ItemTable;
use crate::item::{
    domain::{Item, ItemId, PersistedItemData, ResourceKind},
    ports::{ItemRepository, ItemRepositoryError, ItemRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by item adapters.
pub type ItemPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema for both item tables; every statement is idempotent.
const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_items/up.sql");

/// Builds a connection pool for the given database URL.
///
/// This blocks while the pool opens its initial connections.
///
/// # Errors
///
/// Returns [`ItemRepositoryError::Persistence`] when the pool cannot connect.
pub fn connect_pool(database_url: &str, max_size: u32) -> ItemRepositoryResult<ItemPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(ItemRepositoryError::persistence)
}

/// Creates the item tables when they do not exist yet.
///
/// This is a blocking operation that should be called from `spawn_blocking`
/// or a synchronous context.
///
/// # Errors
///
/// Returns [`ItemRepositoryError::Persistence`] when a connection cannot be
/// obtained or the schema statements fail.
pub fn apply_schema(pool: &ItemPgPool) -> ItemRepositoryResult<()> {
    let mut connection = pool.get().map_err(ItemRepositoryError::persistence)?;
    connection
        .batch_execute(SCHEMA_SQL)
        .map_err(ItemRepositoryError::persistence)
}

/// `PostgreSQL`-backed item repository for resource kind `K`.
///
/// Queries go through the kind's [`ItemTable`] binding. Timestamps come from
/// the injected clock so they agree with the in-memory adapter.
pub struct PostgresItemRepository<K, C = DefaultClock>
where
    K: ResourceKind,
    C: Clock + Send + Sync,
{
    pool: ItemPgPool,
    clock: Arc<C>,
    kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> PostgresItemRepository<K> {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub fn new(pool: ItemPgPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }
}

impl<K, C> PostgresItemRepository<K, C>
where
    K: ResourceKind,
    C: Clock + Send + Sync,
{
    /// Creates a new repository whose timestamps come from `clock`.
    #[must_use]
    pub const fn with_clock(pool: ItemPgPool, clock: Arc<C>) -> Self {
        Self {
            pool,
            clock,
            kind: PhantomData,
        }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ItemRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ItemRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ItemRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ItemRepositoryError::persistence)?
    }

    fn timestamp(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        K::TIMESTAMPED.then(|| self.clock.utc())
    }
}

impl<K, C> Clone for PostgresItemRepository<K, C>
where
    K: ResourceKind,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            clock: Arc::clone(&self.clock),
            kind: PhantomData,
        }
    }
}

impl<K, C> fmt::Debug for PostgresItemRepository<K, C>
where
    K: ResourceKind,
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresItemRepository")
            .field("table", &K::TABLE)
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<K, C> ItemRepository<K> for PostgresItemRepository<K, C>
where
    K: ItemTable,
    C: Clock + Send + Sync,
{
    async fn find_all(&self) -> ItemRepositoryResult<Vec<Item<K>>> {
        self.run_blocking(move |connection| {
            let rows = K::load_all(connection).map_err(ItemRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_item).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: ItemId) -> ItemRepositoryResult<Option<Item<K>>> {
        self.run_blocking(move |connection| {
            let row =
                K::load_one(connection, id.value()).map_err(ItemRepositoryError::persistence)?;
            Ok(row.map(row_to_item))
        })
        .await
    }

    async fn save(&self, item: Item<K>) -> ItemRepositoryResult<Item<K>> {
        let stamp = self.timestamp();
        let name = item.name().to_owned();
        let done = item.is_done();

        match item.id() {
            None => {
                let row = NewItemRow {
                    name,
                    done,
                    creation_date_time: stamp,
                    last_modification_date_time: stamp,
                };
                self.run_blocking(move |connection| {
                    K::insert(connection, row)
                        .map(row_to_item)
                        .map_err(ItemRepositoryError::persistence)
                })
                .await
            }
            Some(id) => {
                let changes = ItemChanges {
                    name,
                    done,
                    last_modification_date_time: stamp,
                };
                self.run_blocking(move |connection| {
                    K::update(connection, id.value(), changes)
                        .map_err(ItemRepositoryError::persistence)?
                        .map(row_to_item)
                        .ok_or(ItemRepositoryError::NotFound(id))
                })
                .await
            }
        }
    }

    async fn delete_by_id(&self, id: ItemId) -> ItemRepositoryResult<()> {
        self.run_blocking(move |connection| {
            K::delete_one(connection, id.value()).map_err(ItemRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete_all(&self) -> ItemRepositoryResult<()> {
        self.run_blocking(move |connection| {
            K::delete_every(connection).map_err(ItemRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_item<K: ResourceKind>(row: ItemRow) -> Item<K> {
    let ItemRow {
        id,
        name,
        done,
        creation_date_time,
        last_modification_date_time,
    } = row;

    Item::from_persisted(PersistedItemData {
        id: ItemId::new(id),
        name,
        done,
        created_at: creation_date_time,
        updated_at: last_modification_date_time,
    })
}
