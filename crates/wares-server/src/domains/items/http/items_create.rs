use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::app::AppState;
use crate::domains::items::service::{self, CreateItemCommand};

use super::items_helpers::echo_response;
use super::items_models::ItemRequest;
use super::map_items_error;

pub(super) async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemRequest>,
) -> impl IntoResponse {
    let command = CreateItemCommand {
        name: payload.name.clone(),
        description: payload.description.clone(),
        brand: payload.brand.clone(),
        price: payload.price,
    };
    match service::create_item(&state, command).await {
        Ok(item_id) => (StatusCode::CREATED, Json(echo_response(item_id, payload))).into_response(),
        Err(error) => map_items_error(error),
    }
}
