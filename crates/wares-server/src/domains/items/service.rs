use thiserror::Error;
use wares_core::Item;
use wares_db::repo::ItemRepo;

use crate::app::AppState;

#[derive(Debug, Error, Clone, Copy)]
pub enum ItemsError {
    #[error("not_found")]
    NotFound,
    #[error("db_error")]
    Db,
}

pub struct CreateItemCommand {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: f64,
}

/// Only the fields the update operation persists. Brand and price submitted
/// on the wire are echoed back to the client but never written.
pub struct UpdateItemCommand {
    pub name: String,
    pub description: String,
}

pub async fn create_item(state: &AppState, command: CreateItemCommand) -> Result<i64, ItemsError> {
    let item_repo = ItemRepo::new(&state.db);
    let Ok(item_id) = item_repo
        .create(
            &command.name,
            &command.description,
            &command.brand,
            command.price,
        )
        .await
    else {
        tracing::error!(event = "item_create_failed", "DB error");
        return Err(ItemsError::Db);
    };

    tracing::info!(event = "item_created", item_id, "Item created");
    Ok(item_id)
}

pub async fn get_item(state: &AppState, item_id: i64) -> Result<Item, ItemsError> {
    let item_repo = ItemRepo::new(&state.db);
    let item = match item_repo.get_by_id(item_id).await {
        Ok(Some(item)) => item,
        Ok(None) => return Err(ItemsError::NotFound),
        Err(_) => {
            tracing::error!(event = "item_get_failed", "DB error");
            return Err(ItemsError::Db);
        }
    };

    tracing::info!(event = "item_fetched", item_id, "Item fetched");
    Ok(item)
}

pub async fn update_item(
    state: &AppState,
    item_id: i64,
    command: UpdateItemCommand,
) -> Result<(), ItemsError> {
    let item_repo = ItemRepo::new(&state.db);
    let Ok(rows) = item_repo
        .update_details(item_id, &command.name, &command.description)
        .await
    else {
        tracing::error!(event = "item_update_failed", "DB error");
        return Err(ItemsError::Db);
    };

    // Zero matched rows is still reported as success to the client.
    tracing::info!(event = "item_updated", item_id, rows, "Item update completed");
    Ok(())
}

pub async fn delete_item(state: &AppState, item_id: i64) -> Result<(), ItemsError> {
    let item_repo = ItemRepo::new(&state.db);
    let Ok(rows) = item_repo.delete_by_id(item_id).await else {
        tracing::error!(event = "item_delete_failed", "DB error");
        return Err(ItemsError::Db);
    };

    // Zero matched rows is still reported as success to the client.
    tracing::info!(event = "item_deleted", item_id, rows, "Item delete completed");
    Ok(())
}

pub async fn list_items_by_brand(state: &AppState, brand: &str) -> Result<Vec<Item>, ItemsError> {
    let item_repo = ItemRepo::new(&state.db);
    let Ok(items) = item_repo.list_by_brand(brand).await else {
        tracing::error!(event = "items_list_failed", "DB error");
        return Err(ItemsError::Db);
    };

    tracing::info!(
        event = "items_listed",
        brand = %brand,
        count = items.len(),
        "Item list returned"
    );
    Ok(items)
}

pub async fn total_sales_by_brand(state: &AppState, brand: &str) -> Result<f64, ItemsError> {
    let item_repo = ItemRepo::new(&state.db);
    let total = match item_repo.total_price_by_brand(brand).await {
        // A brand with no rows sums to NULL, which the endpoint reports as zero.
        Ok(total) => total.unwrap_or(0.0),
        Err(_) => {
            tracing::error!(event = "total_sales_failed", "DB error");
            return Err(ItemsError::Db);
        }
    };

    tracing::info!(
        event = "total_sales_computed",
        brand = %brand,
        total_sales = total,
        "Brand total computed"
    );
    Ok(total)
}
