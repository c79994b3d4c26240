//! Domain model for named, completable items.
//!
//! Items are plain records; identity and timestamps are assigned by whichever
//! store persists them, so the domain only exposes the hooks a store needs to
//! record those values.

mod ids;
mod item;
mod kind;

pub use ids::ItemId;
pub use item::{Item, MAX_NAME_LENGTH, PersistedItemData, listing_order};
pub use kind::{ResourceKind, Task, Todo};
