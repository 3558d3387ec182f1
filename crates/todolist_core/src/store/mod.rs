//! Store layer owning the canonical in-memory collection.
//!
//! # Responsibility
//! - Orchestrate mutations over the ordered todo collection.
//! - Keep durable storage synchronized with every change.

pub mod todo_store;
