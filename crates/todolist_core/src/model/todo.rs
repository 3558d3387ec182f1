//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical record held by the store and mirrored to storage.
//! - Provide constructors for the create, adopt and seed lifecycle paths.
//!
//! # Invariants
//! - `id` is stable and immutable after creation.
//! - Wire field names are exactly `id`, `text`, `completed`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One task record with identity, label and completion flag.
///
/// The serialized shape doubles as the durable-storage blob element, so the
/// field names are part of the storage contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable global ID, the sole lookup key.
    pub id: String,
    /// User-visible label. Mutable; empty strings are accepted.
    pub text: String,
    /// Completion flag, toggled by the store.
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new item with a freshly generated unique ID.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), text)
    }

    /// Creates an item with a caller-provided ID.
    ///
    /// Used by the seed path where identity already exists remotely.
    pub fn with_id(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag in place.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
