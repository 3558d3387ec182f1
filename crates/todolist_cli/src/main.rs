//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todolist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use todolist_core::{MemoryBlobStore, TodoStore};

fn main() {
    println!("todolist_core version={}", todolist_core::core_version());

    // A throwaway in-memory store exercises the full mutation path without
    // touching the filesystem or the network.
    let mut store = TodoStore::new(MemoryBlobStore::new());
    match store.add_todo("smoke check") {
        Ok(_) => println!("todolist_core smoke count={}", store.todos().len()),
        Err(err) => eprintln!("todolist_core smoke failed: {err}"),
    }
}
