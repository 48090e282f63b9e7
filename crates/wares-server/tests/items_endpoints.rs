use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::TestApp;

async fn create_item(app: &TestApp, name: &str, brand: &str, price: f64) -> i64 {
    let payload = json!({
        "name": name,
        "description": format!("{name} description"),
        "brand": brand,
        "price": price,
    });
    let (status, body) = app.send_json(Method::POST, "/items/", payload).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {:?}", body);
    body["id"].as_i64().expect("id")
}

#[tokio::test]
async fn create_echoes_submitted_fields_with_id() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "Widget",
        "description": "A fine widget",
        "brand": "Acme",
        "price": 9.99,
    });
    let (status, body) = app.send_json(Method::POST, "/items/", payload).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {:?}", body);
    assert!(body["id"].as_i64().expect("id") >= 1);
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "A fine widget");
    assert_eq!(body["brand"], "Acme");
    assert_eq!(body["price"], 9.99);
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = TestApp::new().await;
    let item_id = create_item(&app, "Widget", "Acme", 9.99).await;

    let (status, body) = app.get_json(&format!("/items/{item_id}")).await;
    assert_eq!(status, StatusCode::OK, "get failed: {:?}", body);
    assert_eq!(body["id"], item_id);
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "Widget description");
    assert_eq!(body["brand"], "Acme");
    assert_eq!(body["price"], 9.99);
}

#[tokio::test]
async fn get_missing_item_returns_not_found_detail() {
    let app = TestApp::new().await;

    let (status, body) = app.get_json("/items/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Item not found");
}

#[tokio::test]
async fn create_rejects_missing_field() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "Widget",
        "brand": "Acme",
        "price": 9.99,
    });
    let (status, _body) = app.send_json(Method::POST, "/items/", payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_rejects_wrong_field_type() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "Widget",
        "description": "A fine widget",
        "brand": "Acme",
        "price": "expensive",
    });
    let (status, _body) = app.send_json(Method::POST, "/items/", payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_persists_name_and_description_only() {
    let app = TestApp::new().await;
    let item_id = create_item(&app, "Widget", "Acme", 9.99).await;

    let payload = json!({
        "name": "Gadget",
        "description": "Refreshed",
        "brand": "Globex",
        "price": 199.0,
    });
    let (status, body) = app
        .send_json(Method::PUT, &format!("/items/{item_id}"), payload)
        .await;
    assert_eq!(status, StatusCode::OK, "update failed: {:?}", body);
    // The response echoes the full submitted payload.
    assert_eq!(body["id"], item_id);
    assert_eq!(body["name"], "Gadget");
    assert_eq!(body["description"], "Refreshed");
    assert_eq!(body["brand"], "Globex");
    assert_eq!(body["price"], 199.0);

    // Storage keeps the original brand and price.
    let (status, body) = app.get_json(&format!("/items/{item_id}")).await;
    assert_eq!(status, StatusCode::OK, "get failed: {:?}", body);
    assert_eq!(body["name"], "Gadget");
    assert_eq!(body["description"], "Refreshed");
    assert_eq!(body["brand"], "Acme");
    assert_eq!(body["price"], 9.99);
}

#[tokio::test]
async fn update_missing_item_still_echoes_payload() {
    let app = TestApp::new().await;
    let item_id = create_item(&app, "Widget", "Acme", 9.99).await;

    let payload = json!({
        "name": "Ghost",
        "description": "Never stored",
        "brand": "Nowhere",
        "price": 1.0,
    });
    let (status, body) = app
        .send_json(Method::PUT, "/items/999999", payload)
        .await;
    assert_eq!(status, StatusCode::OK, "update failed: {:?}", body);
    assert_eq!(body["id"], 999_999);
    assert_eq!(body["name"], "Ghost");

    let (status, _body) = app.get_json("/items/999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Existing rows are untouched.
    let (status, body) = app.get_json(&format!("/items/{item_id}")).await;
    assert_eq!(status, StatusCode::OK, "get failed: {:?}", body);
    assert_eq!(body["name"], "Widget");
}

#[tokio::test]
async fn delete_removes_item_and_reports_message() {
    let app = TestApp::new().await;
    let item_id = create_item(&app, "Widget", "Acme", 9.99).await;

    let (status, body) = app
        .send_empty(Method::DELETE, &format!("/items/{item_id}"))
        .await;
    assert_eq!(status, StatusCode::OK, "delete failed: {:?}", body);
    assert_eq!(body["message"], "item_deleted");

    let (status, _body) = app.get_json(&format!("/items/{item_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_item_reports_same_message() {
    let app = TestApp::new().await;
    let item_id = create_item(&app, "Widget", "Acme", 9.99).await;

    let (status, body) = app.send_empty(Method::DELETE, "/items/999999").await;
    assert_eq!(status, StatusCode::OK, "delete failed: {:?}", body);
    assert_eq!(body["message"], "item_deleted");

    // Existing rows are untouched.
    let (status, _body) = app.get_json(&format!("/items/{item_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn list_by_brand_returns_matching_items_in_id_order() {
    let app = TestApp::new().await;
    let first = create_item(&app, "Widget", "Acme", 9.99).await;
    create_item(&app, "Sprocket", "Globex", 3.5).await;
    let second = create_item(&app, "Gadget", "Acme", 5.5).await;

    let (status, body) = app.get_json("/items/brand/Acme").await;
    assert_eq!(status, StatusCode::OK, "list failed: {:?}", body);
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], first);
    assert_eq!(items[1]["id"], second);
    assert_eq!(items[0]["brand"], "Acme");
    assert_eq!(items[1]["brand"], "Acme");
}

#[tokio::test]
async fn list_by_unknown_brand_returns_empty_array() {
    let app = TestApp::new().await;
    create_item(&app, "Widget", "Acme", 9.99).await;

    let (status, body) = app.get_json("/items/brand/Nobody").await;
    assert_eq!(status, StatusCode::OK, "list failed: {:?}", body);
    let items = body.as_array().expect("array body");
    assert!(items.is_empty());
}

#[tokio::test]
async fn total_sales_sums_brand_prices() {
    let app = TestApp::new().await;
    create_item(&app, "Widget", "Acme", 10.0).await;
    create_item(&app, "Gadget", "Acme", 5.5).await;
    create_item(&app, "Sprocket", "Globex", 3.5).await;

    let (status, body) = app.get_json("/items/brand/Acme/total_sales").await;
    assert_eq!(status, StatusCode::OK, "total failed: {:?}", body);
    assert_eq!(body["brand"], "Acme");
    assert_eq!(body["total_sales"], 15.5);
}

#[tokio::test]
async fn total_sales_for_unknown_brand_is_zero() {
    let app = TestApp::new().await;
    create_item(&app, "Widget", "Acme", 9.99).await;

    let (status, body) = app.get_json("/items/brand/Nobody/total_sales").await;
    assert_eq!(status, StatusCode::OK, "total failed: {:?}", body);
    assert_eq!(body["brand"], "Nobody");
    assert_eq!(body["total_sales"], 0.0);
}
