mod items_create;
mod items_helpers;
pub(crate) mod items_models;
mod items_read;
mod items_update;

use axum::{http::StatusCode, response::IntoResponse, routing::get, routing::post, Json, Router};

use crate::app::AppState;
use crate::domains::items::service::ItemsError;

use items_create::create_item;
use items_read::{get_item, list_items_by_brand, total_sales_by_brand};
use items_update::{delete_item, update_item};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items/", post(create_item))
        .route(
            "/items/:item_id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/items/brand/:brand_name", get(list_items_by_brand))
        .route(
            "/items/brand/:brand_name/total_sales",
            get(total_sales_by_brand),
        )
}

fn map_items_error(error: ItemsError) -> axum::response::Response {
    match error {
        ItemsError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(items_models::ErrorDetail {
                detail: "Item not found",
            }),
        )
            .into_response(),
        ItemsError::Db => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(items_models::ErrorResponse { error: "db_error" }),
        )
            .into_response(),
    }
}
