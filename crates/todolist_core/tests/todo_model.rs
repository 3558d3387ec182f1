use todolist_core::TodoItem;

#[test]
fn new_sets_defaults_and_fresh_id() {
    let item = TodoItem::new("hello");

    assert!(!item.id.is_empty());
    assert_eq!(item.text, "hello");
    assert!(!item.completed);
}

#[test]
fn new_generates_distinct_ids() {
    let first = TodoItem::new("a");
    let second = TodoItem::new("a");
    assert_ne!(first.id, second.id);
}

#[test]
fn toggle_is_an_involution() {
    let mut item = TodoItem::new("flip me");

    item.toggle();
    assert!(item.completed);

    item.toggle();
    assert!(!item.completed);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let item = TodoItem {
        id: "a1".to_string(),
        text: "ship it".to_string(),
        completed: true,
    };

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], "a1");
    assert_eq!(json["text"], "ship it");
    assert_eq!(json["completed"], true);

    let decoded: TodoItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn empty_text_is_accepted() {
    let item = TodoItem::new("");
    assert_eq!(item.text, "");
}
