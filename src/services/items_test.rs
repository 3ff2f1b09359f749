use super::*;

fn body(name: &str) -> ItemCreate {
    ItemCreate { name: name.to_owned(), description: None, completed: false }
}

#[test]
fn new_store_is_empty() {
    let store = ItemStore::new();
    assert!(store.list().is_empty());
}

#[test]
fn create_assigns_ids_from_one_in_order() {
    let mut store = ItemStore::new();
    let a = store.create(body("a"));
    let b = store.create(body("b"));
    assert_eq!((a.id, b.id), (1, 2));
    assert_eq!(store.list(), vec![a, b]);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut store = ItemStore::new();
    let a = store.create(body("a"));
    store.delete(a.id).unwrap();
    let b = store.create(body("b"));
    assert_eq!(b.id, 2);
}

#[test]
fn get_unknown_id_is_not_found() {
    let store = ItemStore::new();
    assert_eq!(store.get(3), Err(ItemError::NotFound(3)));
}

#[test]
fn update_replaces_fields_and_keeps_id() {
    let mut store = ItemStore::new();
    let created = store.create(ItemCreate { name: "a".into(), description: Some("d".into()), completed: false });
    let updated = store.update(created.id, ItemCreate { name: "A".into(), description: None, completed: true }).unwrap();

    assert_eq!(updated, Item { id: created.id, name: "A".into(), description: None, completed: true });
    assert_eq!(store.get(created.id).unwrap(), updated);
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut store = ItemStore::new();
    assert_eq!(store.update(1, body("x")), Err(ItemError::NotFound(1)));
}

#[test]
fn delete_removes_only_target() {
    let mut store = ItemStore::new();
    let a = store.create(body("a"));
    let b = store.create(body("b"));
    store.delete(a.id).unwrap();
    assert_eq!(store.list(), vec![b]);
    assert_eq!(store.delete(a.id), Err(ItemError::NotFound(a.id)));
}

#[test]
fn item_create_defaults_optional_fields() {
    let parsed: ItemCreate = serde_json::from_str(r#"{"name":"only name"}"#).unwrap();
    assert_eq!(parsed, body("only name"));
}

#[test]
fn item_serializes_absent_description_as_null() {
    let item = Item { id: 1, name: "a".into(), description: None, completed: false };
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        serde_json::json!({ "id": 1, "name": "a", "description": null, "completed": false })
    );
}
