use wares_core::Item;

use super::items_models::{ItemRequest, ItemResponse};

pub(super) fn item_response(item: Item) -> ItemResponse {
    ItemResponse {
        id: item.id,
        name: item.name,
        description: item.description,
        brand: item.brand,
        price: item.price,
    }
}

// Write endpoints reply with the submitted fields plus the row id rather than
// re-reading the row.
pub(super) fn echo_response(id: i64, payload: ItemRequest) -> ItemResponse {
    ItemResponse {
        id,
        name: payload.name,
        description: payload.description,
        brand: payload.brand,
        price: payload.price,
    }
}
