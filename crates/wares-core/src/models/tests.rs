use super::*;

#[test]
fn item_serializes_with_flat_fields() {
    let item = Item {
        id: 7,
        name: "Widget".to_string(),
        description: "A widget".to_string(),
        brand: "Acme".to_string(),
        price: 9.99,
    };
    let value = serde_json::to_value(&item).expect("serialize item");
    assert_eq!(value["id"], 7);
    assert_eq!(value["name"], "Widget");
    assert_eq!(value["description"], "A widget");
    assert_eq!(value["brand"], "Acme");
    assert_eq!(value["price"], 9.99);
}

#[test]
fn item_deserializes_from_json() {
    let item: Item = serde_json::from_str(
        r#"{"id":1,"name":"Widget","description":"d","brand":"Acme","price":10.5}"#,
    )
    .expect("deserialize item");
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "Widget");
    assert_eq!(item.brand, "Acme");
    assert_eq!(item.price, 10.5);
}

#[test]
fn item_rejects_missing_fields() {
    let result: Result<Item, _> =
        serde_json::from_str(r#"{"id":1,"name":"Widget","brand":"Acme","price":10.5}"#);
    assert!(result.is_err());
}
