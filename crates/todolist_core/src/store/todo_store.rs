//! Todo store: the canonical ordered collection plus its storage mirror.
//!
//! # Responsibility
//! - Own the in-memory ordered list of todo items.
//! - Expose the mutation operations consumers call directly.
//! - Write the full serialized collection through to storage after every
//!   mutation.
//!
//! # Invariants
//! - Item ids generated here are unique (uuid v4).
//! - Storage under `TODOS_KEY` converges with memory when a mutation returns.
//! - Items are created only by `add_todo` and `initialize`, destroyed only
//!   by `remove_todo`.

use crate::model::todo::TodoItem;
use crate::seed::{SeedError, SeedSource};
use crate::storage::{BlobStore, StorageError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized collection.
pub const TODOS_KEY: &str = "todos";

/// Serialized form of an empty collection; treated the same as no data.
const EMPTY_LIST_JSON: &str = "[]";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error covering storage, seed and codec failures.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Seed(SeedError),
    /// Stored blob did not decode as a collection.
    Decode(serde_json::Error),
    /// Collection did not encode (practically unreachable for this shape).
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Seed(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "stored todos are malformed: {err}"),
            Self::Encode(err) => write!(f, "todos failed to serialize: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Seed(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<SeedError> for StoreError {
    fn from(value: SeedError) -> Self {
        Self::Seed(value)
    }
}

/// Canonical task-list state manager.
///
/// Construct one per application and pass it by reference; there is no
/// ambient singleton. All operations are synchronous; `initialize` is the
/// only one that may block on the network.
pub struct TodoStore<S: BlobStore> {
    storage: S,
    todos: Vec<TodoItem>,
}

impl<S: BlobStore> TodoStore<S> {
    /// Creates an empty store over the given storage backend.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            todos: Vec::new(),
        }
    }

    /// Bootstraps the collection, expected to run once per session.
    ///
    /// Adopts the stored collection verbatim when storage holds one;
    /// otherwise fetches seed records and maps them in source order. Either
    /// way the resulting state is written through.
    ///
    /// # Errors
    /// - `StoreError::Decode` when the stored blob is malformed.
    /// - `StoreError::Seed` when the seed fetch fails.
    /// On error the store is left uninitialized (empty).
    pub fn initialize(&mut self, seed: &dyn SeedSource) -> StoreResult<()> {
        let source = match self.storage.get(TODOS_KEY)? {
            Some(blob) if blob != EMPTY_LIST_JSON => {
                self.todos = serde_json::from_str(&blob).map_err(StoreError::Decode)?;
                "storage"
            }
            _ => {
                let records = seed.fetch()?;
                self.todos = records.into_iter().map(TodoItem::from).collect();
                "seed"
            }
        };

        info!(
            "event=store_init module=store status=ok source={source} count={}",
            self.todos.len()
        );
        self.persist()
    }

    /// Appends a new item with the given text and returns its generated id.
    ///
    /// Empty text is accepted; no validation is applied.
    pub fn add_todo(&mut self, text: impl Into<String>) -> StoreResult<String> {
        let todo = TodoItem::new(text);
        let id = todo.id.clone();
        self.todos.push(todo);
        self.persist()?;
        Ok(id)
    }

    /// Removes the item with the given id; silent no-op when absent.
    pub fn remove_todo(&mut self, id: &str) -> StoreResult<()> {
        self.todos.retain(|todo| todo.id != id);
        self.persist()
    }

    /// Flips the completion flag of the item with the given id; silent
    /// no-op when absent.
    pub fn toggle_todo(&mut self, id: &str) -> StoreResult<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.toggle();
        }
        self.persist()
    }

    /// Replaces the text of the item with the given id; silent no-op when
    /// absent. Nothing distinguishes miss from update for the caller.
    pub fn update_todo(&mut self, id: &str, new_text: impl Into<String>) -> StoreResult<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.text = new_text.into();
        }
        self.persist()
    }

    /// Replaces the whole collection with the caller-supplied order.
    ///
    /// # Contract
    /// - The caller is trusted to pass a permutation of the current items;
    ///   duplicates or dropped items are accepted silently.
    pub fn reorder_todos(&mut self, new_order: Vec<TodoItem>) -> StoreResult<()> {
        self.todos = new_order;
        self.persist()
    }

    /// Live ordered collection, for rendering.
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    fn persist(&self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.todos).map_err(StoreError::Encode)?;
        self.storage.set(TODOS_KEY, &blob)?;
        Ok(())
    }
}
