use aide::axum::{
    routing::{get, post},
    ApiRouter,
};
use aide::openapi::{Info, OpenApi};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;

use crate::app::AppState;
use crate::domains::items::http::items_models::{
    ItemDeletedResponse, ItemRequest, ItemResponse, TotalSalesResponse,
};
use crate::http::routes::health::{GreetingResponse, HealthResponse};

pub fn build_openapi() -> OpenApi {
    let mut api = OpenApi {
        info: Info {
            title: "wares-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let _ = doc_router().finish_api(&mut api);
    api
}

fn doc_router() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route("/", get(root))
        .api_route("/health", get(health))
        .api_route("/items/", post(items_create))
        .api_route(
            "/items/:item_id",
            get(items_get).put(items_update).delete(items_delete),
        )
        .api_route("/items/brand/:brand_name", get(items_by_brand))
        .api_route(
            "/items/brand/:brand_name/total_sales",
            get(items_total_sales),
        )
}

fn not_implemented<T>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::NOT_IMPLEMENTED, Json(body))
}

async fn root() -> (StatusCode, Json<GreetingResponse>) {
    not_implemented(GreetingResponse {
        message: "not_implemented",
    })
}

async fn health() -> (StatusCode, Json<HealthResponse>) {
    not_implemented(HealthResponse {
        status: "not_implemented",
        version: "0.0.0",
        build_commit: None,
        uptime_seconds: 0,
    })
}

async fn items_create(Json(_payload): Json<ItemRequest>) -> (StatusCode, Json<ItemResponse>) {
    not_implemented(ItemResponse {
        id: 0,
        name: String::new(),
        description: String::new(),
        brand: String::new(),
        price: 0.0,
    })
}

async fn items_get(Path(_item_id): Path<i64>) -> (StatusCode, Json<ItemResponse>) {
    not_implemented(ItemResponse {
        id: 0,
        name: String::new(),
        description: String::new(),
        brand: String::new(),
        price: 0.0,
    })
}

async fn items_update(
    Path(_item_id): Path<i64>,
    Json(_payload): Json<ItemRequest>,
) -> (StatusCode, Json<ItemResponse>) {
    not_implemented(ItemResponse {
        id: 0,
        name: String::new(),
        description: String::new(),
        brand: String::new(),
        price: 0.0,
    })
}

async fn items_delete(Path(_item_id): Path<i64>) -> (StatusCode, Json<ItemDeletedResponse>) {
    not_implemented(ItemDeletedResponse {
        message: "not_implemented",
    })
}

async fn items_by_brand(Path(_brand_name): Path<String>) -> (StatusCode, Json<Vec<ItemResponse>>) {
    not_implemented(Vec::new())
}

async fn items_total_sales(
    Path(_brand_name): Path<String>,
) -> (StatusCode, Json<TotalSalesResponse>) {
    not_implemented(TotalSalesResponse {
        brand: String::new(),
        total_sales: 0.0,
    })
}
