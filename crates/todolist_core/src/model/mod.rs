//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical item shape shared by store, storage and seed paths.
//!
//! # Invariants
//! - Every item is identified by a stable string `id`.
//! - `id` is never reused for another item within one collection.

pub mod todo;
