//! `PostgreSQL` adapters for item persistence.

mod models;
mod repository;
mod schema;
mod tables;

pub use models::{ItemChanges, ItemRow, NewItemRow};
pub use repository::{ItemPgPool, PostgresItemRepository, apply_schema, connect_pool};
pub use tables::ItemTable;
