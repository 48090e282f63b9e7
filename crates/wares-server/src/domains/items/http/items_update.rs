use axum::{extract::State, response::IntoResponse, Json};

use crate::app::AppState;
use crate::domains::items::service::{self, UpdateItemCommand};

use super::items_helpers::echo_response;
use super::items_models::{ItemDeletedResponse, ItemRequest};
use super::map_items_error;

pub(super) async fn update_item(
    State(state): State<AppState>,
    axum::extract::Path(item_id): axum::extract::Path<i64>,
    Json(payload): Json<ItemRequest>,
) -> impl IntoResponse {
    let command = UpdateItemCommand {
        name: payload.name.clone(),
        description: payload.description.clone(),
    };
    match service::update_item(&state, item_id, command).await {
        Ok(()) => Json(echo_response(item_id, payload)).into_response(),
        Err(error) => map_items_error(error),
    }
}

#[tracing::instrument(skip(state), fields(item_id = %item_id))]
pub(super) async fn delete_item(
    State(state): State<AppState>,
    axum::extract::Path(item_id): axum::extract::Path<i64>,
) -> impl IntoResponse {
    match service::delete_item(&state, item_id).await {
        Ok(()) => Json(ItemDeletedResponse {
            message: "item_deleted",
        })
        .into_response(),
        Err(error) => map_items_error(error),
    }
}
