//! Diesel row models for item persistence.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row shared by the `tasks` and `todos` tables.
///
/// Fields follow the column order of both `table!` declarations.
#[derive(Debug, Clone, Queryable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    /// Store-assigned identity.
    pub id: i64,
    /// Item name.
    pub name: String,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp; always null for untimestamped kinds.
    pub creation_date_time: Option<DateTime<Utc>>,
    /// Last modification timestamp; always null for untimestamped kinds.
    pub last_modification_date_time: Option<DateTime<Utc>>,
}

/// Column values for a first insert.
#[derive(Debug, Clone)]
pub struct NewItemRow {
    /// Item name.
    pub name: String,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp, when the kind is timestamped.
    pub creation_date_time: Option<DateTime<Utc>>,
    /// Modification timestamp, when the kind is timestamped.
    pub last_modification_date_time: Option<DateTime<Utc>>,
}

/// Column values written by an update. Creation time is never rewritten.
#[derive(Debug, Clone)]
pub struct ItemChanges {
    /// Item name.
    pub name: String,
    /// Completion flag.
    pub done: bool,
    /// Modification timestamp, when the kind is timestamped.
    pub last_modification_date_time: Option<DateTime<Utc>>,
}
