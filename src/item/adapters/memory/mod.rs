//! In-memory adapters for item persistence.

mod item;

pub use item::InMemoryItemRepository;
