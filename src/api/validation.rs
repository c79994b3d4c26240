//! Request validation at the HTTP boundary.
//!
//! Validation runs before any service call; a failure never reaches the
//! store.

use super::dto::ItemPayload;
use crate::item::domain::MAX_NAME_LENGTH;
use serde::Serialize;
use std::collections::BTreeMap;

/// Message for a missing or blank name.
pub const NAME_MANDATORY: &str = "Name is mandatory";

/// Message for a name longer than [`MAX_NAME_LENGTH`] characters.
pub const NAME_LENGTH: &str = "length must be between 0 and 255";

/// Field-keyed validation failures, serialised as `{"<field>": "<message>"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    /// Creates a failure for a single field.
    #[must_use]
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field, message.into());
        Self(errors)
    }

    /// Returns the message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An item body that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    /// Name as submitted; guaranteed non-blank and within length.
    pub name: String,
    /// Completion flag, `false` when absent.
    pub done: bool,
}

/// Validates an item body.
///
/// The name must be present, non-blank after trimming, and at most
/// [`MAX_NAME_LENGTH`] characters. The name is kept exactly as submitted.
///
/// # Errors
///
/// Returns [`ValidationErrors`] keyed by `name` describing the first failed
/// rule.
pub fn validate_item(payload: ItemPayload) -> Result<ValidatedItem, ValidationErrors> {
    let ItemPayload { name, done } = payload;

    let Some(name) = name.filter(|value| !value.trim().is_empty()) else {
        return Err(ValidationErrors::single("name", NAME_MANDATORY));
    };

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationErrors::single("name", NAME_LENGTH));
    }

    Ok(ValidatedItem {
        name,
        done: done.unwrap_or(false),
    })
}
