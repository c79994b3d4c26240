//! Demo data created on start-up.

use crate::item::{
    domain::{Item, ResourceKind},
    ports::ItemRepository,
    services::{ItemService, ItemServiceResult},
};

/// Names of the demo items, in creation order.
pub const DEMO_ITEM_NAMES: [&str; 2] = ["Finish portfolio", "Apply for jobs"];

/// Saves the demo items for resource kind `K` and returns them as stored.
///
/// A store that already holds items is left untouched and the result is
/// empty, so restarting against a persistent database does not duplicate the
/// demo rows.
///
/// # Errors
///
/// Returns the first service error; items saved before it remain stored.
pub async fn seed_demo_items<K, R>(service: &ItemService<K, R>) -> ItemServiceResult<Vec<Item<K>>>
where
    K: ResourceKind,
    R: ItemRepository<K>,
{
    let existing = service.find_all().await?.len();
    if existing > 0 {
        tracing::info!(existing, "Skipping demo {}s; store is not empty", K::LABEL);
        return Ok(Vec::new());
    }

    tracing::info!("Creating demo {}s", K::LABEL);
    let mut seeded = Vec::with_capacity(DEMO_ITEM_NAMES.len());
    for name in DEMO_ITEM_NAMES {
        seeded.push(service.save(Item::new(name)).await?);
    }
    Ok(seeded)
}
