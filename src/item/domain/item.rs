//! Item aggregate and its listing order.

use super::{ItemId, ResourceKind};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Maximum item name length in characters, matching the `VARCHAR(255)` column.
pub const MAX_NAME_LENGTH: usize = 255;

/// A named, completable record of resource kind `K`.
///
/// Equality and hashing cover the identity, name, and completion flag only;
/// two items that differ solely in their timestamps compare equal.
#[derive(Debug, Clone)]
pub struct Item<K> {
    id: Option<ItemId>,
    name: String,
    done: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    kind: PhantomData<K>,
}

/// Parameter object for reconstructing a persisted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedItemData {
    /// Persisted identity.
    pub id: ItemId,
    /// Persisted name.
    pub name: String,
    /// Persisted completion flag.
    pub done: bool,
    /// Creation timestamp, present for timestamped kinds.
    pub created_at: Option<DateTime<Utc>>,
    /// Latest modification timestamp, present for timestamped kinds.
    pub updated_at: Option<DateTime<Utc>>,
}

impl<K: ResourceKind> Item<K> {
    /// Creates an unsaved item that is not done.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            done: false,
            created_at: None,
            updated_at: None,
            kind: PhantomData,
        }
    }

    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedItemData) -> Self {
        Self {
            id: Some(data.id),
            name: data.name,
            done: data.done,
            created_at: data.created_at,
            updated_at: data.updated_at,
            kind: PhantomData,
        }
    }

    /// Returns the store-assigned identity, if persisted.
    #[must_use]
    pub const fn id(&self) -> Option<ItemId> {
        self.id
    }

    /// Overrides the identity.
    ///
    /// Stores assign identities themselves; this is for callers that rebuild
    /// an item from an external representation.
    pub const fn set_id(&mut self, id: ItemId) {
        self.id = Some(id);
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the item name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns whether the item is done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Sets the completion flag.
    pub const fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Returns the creation timestamp once the store has set it.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the latest modification timestamp once the store has set it.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns `true` until a store has assigned an identity.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Records a first insert: assigns the identity and, for timestamped
    /// kinds, sets both timestamps to `now`.
    pub fn record_insert(&mut self, id: ItemId, now: DateTime<Utc>) {
        self.id = Some(id);
        if K::TIMESTAMPED {
            self.created_at = Some(now);
            self.updated_at = Some(now);
        }
    }

    /// Records an update of an already stored row.
    ///
    /// The creation time always comes from the stored row so callers cannot
    /// rewrite it; the modification time moves to `now` for timestamped kinds.
    pub fn record_update(&mut self, stored_created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        if K::TIMESTAMPED {
            self.created_at = stored_created_at;
            self.updated_at = Some(now);
        } else {
            self.created_at = None;
            self.updated_at = None;
        }
    }
}

impl<K> PartialEq for Item<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.done == other.done
    }
}

impl<K> Eq for Item<K> {}

impl<K> Hash for Item<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.done.hash(state);
    }
}

/// Orders items the way a collection listing returns them.
///
/// Timestamped kinds list the most recently modified item first, breaking
/// ties by newest creation time and then by highest identity. Other kinds
/// list in insertion order.
#[must_use]
pub fn listing_order<K: ResourceKind>(left: &Item<K>, right: &Item<K>) -> Ordering {
    if K::TIMESTAMPED {
        right
            .updated_at
            .cmp(&left.updated_at)
            .then_with(|| right.created_at.cmp(&left.created_at))
            .then_with(|| right.id.cmp(&left.id))
    } else {
        left.id.cmp(&right.id)
    }
}
