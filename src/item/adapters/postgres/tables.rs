//! Per-kind table bindings with compile-time checked queries.

use super::models::{ItemChanges, ItemRow, NewItemRow};
use super::schema::{tasks, todos};
use crate::item::domain::{ResourceKind, Task, Todo};
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// Typed queries against the table backing one resource kind.
///
/// Listing queries return rows in the same order as
/// [`crate::item::domain::listing_order`].
pub trait ItemTable: ResourceKind {
    /// Loads every row in listing order.
    ///
    /// # Errors
    ///
    /// Returns the Diesel error when the query fails.
    fn load_all(connection: &mut PgConnection) -> QueryResult<Vec<ItemRow>>;

    /// Loads the row with the given identity, if present.
    ///
    /// # Errors
    ///
    /// Returns the Diesel error when the query fails.
    fn load_one(connection: &mut PgConnection, id: i64) -> QueryResult<Option<ItemRow>>;

    /// Inserts a row and returns it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns the Diesel error when the insert fails.
    fn insert(connection: &mut PgConnection, row: NewItemRow) -> QueryResult<ItemRow>;

    /// Updates the row with the given identity, returning `None` when no row
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns the Diesel error when the update fails.
    fn update(
        connection: &mut PgConnection,
        id: i64,
        changes: ItemChanges,
    ) -> QueryResult<Option<ItemRow>>;

    /// Deletes the row with the given identity and returns the affected count.
    ///
    /// # Errors
    ///
    /// Returns the Diesel error when the delete fails.
    fn delete_one(connection: &mut PgConnection, id: i64) -> QueryResult<usize>;

    /// Deletes every row and returns the affected count.
    ///
    /// # Errors
    ///
    /// Returns the Diesel error when the delete fails.
    fn delete_every(connection: &mut PgConnection) -> QueryResult<usize>;
}

macro_rules! item_table {
    ($kind:ty, $table:ident, $order:expr) => {
        impl ItemTable for $kind {
            fn load_all(connection: &mut PgConnection) -> QueryResult<Vec<ItemRow>> {
                $table::table.order($order).load::<ItemRow>(connection)
            }

            fn load_one(connection: &mut PgConnection, id: i64) -> QueryResult<Option<ItemRow>> {
                $table::table
                    .find(id)
                    .first::<ItemRow>(connection)
                    .optional()
            }

            fn insert(connection: &mut PgConnection, row: NewItemRow) -> QueryResult<ItemRow> {
                diesel::insert_into($table::table)
                    .values((
                        $table::name.eq(row.name),
                        $table::done.eq(row.done),
                        $table::creation_date_time.eq(row.creation_date_time),
                        $table::last_modification_date_time.eq(row.last_modification_date_time),
                    ))
                    .get_result::<ItemRow>(connection)
            }

            fn update(
                connection: &mut PgConnection,
                id: i64,
                changes: ItemChanges,
            ) -> QueryResult<Option<ItemRow>> {
                diesel::update($table::table.find(id))
                    .set((
                        $table::name.eq(changes.name),
                        $table::done.eq(changes.done),
                        $table::last_modification_date_time
                            .eq(changes.last_modification_date_time),
                    ))
                    .get_result::<ItemRow>(connection)
                    .optional()
            }

            fn delete_one(connection: &mut PgConnection, id: i64) -> QueryResult<usize> {
                diesel::delete($table::table.find(id)).execute(connection)
            }

            fn delete_every(connection: &mut PgConnection) -> QueryResult<usize> {
                diesel::delete($table::table).execute(connection)
            }
        }
    };
}

item_table!(
    Task,
    tasks,
    (
        tasks::last_modification_date_time.desc(),
        tasks::creation_date_time.desc(),
        tasks::id.desc(),
    )
);

item_table!(Todo, todos, todos::id.asc());
