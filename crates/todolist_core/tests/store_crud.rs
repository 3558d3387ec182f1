use todolist_core::{BlobStore, MemoryBlobStore, TodoItem, TodoStore, TODOS_KEY};

fn stored_items(backend: &MemoryBlobStore) -> Vec<TodoItem> {
    let blob = backend
        .get(TODOS_KEY)
        .unwrap()
        .expect("storage should hold a collection");
    serde_json::from_str(&blob).unwrap()
}

#[test]
fn add_grows_collection_with_distinct_ids() {
    let backend = MemoryBlobStore::new();
    let mut store = TodoStore::new(&backend);

    let mut ids = Vec::new();
    for n in 0..5 {
        ids.push(store.add_todo(format!("task {n}")).unwrap());
    }

    assert_eq!(store.todos().len(), 5);
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn add_on_empty_collection_yields_expected_item() {
    let backend = MemoryBlobStore::new();
    let mut store = TodoStore::new(&backend);

    let id = store.add_todo("Write spec").unwrap();

    let todos = store.todos();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].text, "Write spec");
    assert!(!todos[0].completed);
}

#[test]
fn remove_is_idempotent() {
    let backend = MemoryBlobStore::new();
    let mut store = TodoStore::new(&backend);

    let keep = store.add_todo("keep").unwrap();
    let gone = store.add_todo("drop").unwrap();

    store.remove_todo(&gone).unwrap();
    assert_eq!(store.todos().len(), 1);

    // Second removal of the same id is a silent no-op.
    store.remove_todo(&gone).unwrap();
    assert_eq!(store.todos().len(), 1);
    assert_eq!(store.todos()[0].id, keep);
}

#[test]
fn toggle_twice_restores_original_state() {
    let backend = MemoryBlobStore::new();
    let mut store = TodoStore::new(&backend);
    let id = store.add_todo("flip").unwrap();

    store.toggle_todo(&id).unwrap();
    assert!(store.todos()[0].completed);

    store.toggle_todo(&id).unwrap();
    assert!(!store.todos()[0].completed);
}

#[test]
fn toggle_unknown_id_is_a_silent_noop() {
    let backend = MemoryBlobStore::new();
    let mut store = TodoStore::new(&backend);
    store.add_todo("only").unwrap();

    let before = store.todos().to_vec();
    store.toggle_todo("no-such-id").unwrap();
    assert_eq!(store.todos(), before.as_slice());
}

#[test]
fn update_replaces_text_and_misses_silently() {
    let backend = MemoryBlobStore::new();
    let mut store = TodoStore::new(&backend);
    let id = store.add_todo("draft").unwrap();

    store.update_todo(&id, "final").unwrap();
    assert_eq!(store.todos()[0].text, "final");

    store.update_todo("no-such-id", "ignored").unwrap();
    assert_eq!(store.todos()[0].text, "final");
    assert_eq!(store.todos().len(), 1);
}

#[test]
fn reorder_replaces_order_without_touching_fields() {
    let backend = MemoryBlobStore::new();
    let mut store = TodoStore::new(&backend);
    store.add_todo("A").unwrap();
    store.add_todo("B").unwrap();

    let mut reversed = store.todos().to_vec();
    reversed.reverse();
    let expected = reversed.clone();

    store.reorder_todos(reversed).unwrap();
    assert_eq!(store.todos(), expected.as_slice());
    assert_eq!(store.todos()[0].text, "B");
    assert_eq!(store.todos()[1].text, "A");
}

#[test]
fn reorder_accepts_non_permutations_verbatim() {
    let backend = MemoryBlobStore::new();
    let mut store = TodoStore::new(&backend);
    store.add_todo("A").unwrap();
    store.add_todo("B").unwrap();

    // Caller contract: duplicates and drops pass through unchecked.
    let only_first = vec![store.todos()[0].clone()];
    store.reorder_todos(only_first).unwrap();
    assert_eq!(store.todos().len(), 1);
    assert_eq!(store.todos()[0].text, "A");
}

#[test]
fn storage_mirrors_memory_after_every_mutation() {
    let backend = MemoryBlobStore::new();
    let mut store = TodoStore::new(&backend);

    let id = store.add_todo("one").unwrap();
    assert_eq!(stored_items(&backend), store.todos());

    store.add_todo("two").unwrap();
    assert_eq!(stored_items(&backend), store.todos());

    store.toggle_todo(&id).unwrap();
    assert_eq!(stored_items(&backend), store.todos());

    store.update_todo(&id, "one renamed").unwrap();
    assert_eq!(stored_items(&backend), store.todos());

    let mut reversed = store.todos().to_vec();
    reversed.reverse();
    store.reorder_todos(reversed).unwrap();
    assert_eq!(stored_items(&backend), store.todos());

    store.remove_todo(&id).unwrap();
    assert_eq!(stored_items(&backend), store.todos());
}
