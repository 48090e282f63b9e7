use axum::{extract::State, response::IntoResponse, Json};

use crate::app::AppState;
use crate::domains::items::service;

use super::items_helpers::item_response;
use super::items_models::TotalSalesResponse;
use super::map_items_error;

#[tracing::instrument(skip(state), fields(item_id = %item_id))]
pub(super) async fn get_item(
    State(state): State<AppState>,
    axum::extract::Path(item_id): axum::extract::Path<i64>,
) -> impl IntoResponse {
    match service::get_item(&state, item_id).await {
        Ok(item) => Json(item_response(item)).into_response(),
        Err(error) => map_items_error(error),
    }
}

pub(super) async fn list_items_by_brand(
    State(state): State<AppState>,
    axum::extract::Path(brand_name): axum::extract::Path<String>,
) -> impl IntoResponse {
    let items = match service::list_items_by_brand(&state, &brand_name).await {
        Ok(items) => items,
        Err(error) => return map_items_error(error),
    };

    let items = items.into_iter().map(item_response).collect::<Vec<_>>();
    Json(items).into_response()
}

pub(super) async fn total_sales_by_brand(
    State(state): State<AppState>,
    axum::extract::Path(brand_name): axum::extract::Path<String>,
) -> impl IntoResponse {
    match service::total_sales_by_brand(&state, &brand_name).await {
        Ok(total_sales) => Json(TotalSalesResponse {
            brand: brand_name,
            total_sales,
        })
        .into_response(),
        Err(error) => map_items_error(error),
    }
}
