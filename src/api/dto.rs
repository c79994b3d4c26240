//! Request and response bodies for item resources.

use crate::item::domain::{Item, ResourceKind};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Incoming item body for `POST` and `PUT`.
///
/// Every field is optional at the wire level so that a missing name reaches
/// validation instead of failing deserialisation. Unknown fields, including
/// `id` and timestamps, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemPayload {
    /// Requested name.
    #[serde(default)]
    pub name: Option<String>,
    /// Requested completion flag; only honoured on creation.
    #[serde(default)]
    pub done: Option<bool>,
}

impl ItemPayload {
    /// Creates a payload carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            done: None,
        }
    }
}

/// Outgoing JSON form of an item.
///
/// `id` is always present (null before persistence); timestamps are omitted
/// until the store has set them. Timestamps are rendered as server-local
/// date-times without an offset, e.g. `2026-01-01T09:30:00.123456`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Store-assigned identity.
    pub id: Option<i64>,
    /// Item name.
    pub name: String,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<NaiveDateTime>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modification_date_time: Option<NaiveDateTime>,
}

impl<K: ResourceKind> From<&Item<K>> for ItemResponse {
    fn from(item: &Item<K>) -> Self {
        Self {
            id: item.id().map(|id| id.value()),
            name: item.name().to_owned(),
            done: item.is_done(),
            creation_date_time: item.created_at().map(local_date_time),
            last_modification_date_time: item.updated_at().map(local_date_time),
        }
    }
}

/// Converts a stored instant to the server-local wall-clock time.
#[must_use]
pub fn local_date_time(at: DateTime<Utc>) -> NaiveDateTime {
    at.with_timezone(&Local).naive_local()
}
