use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, JsonSchema)]
pub(crate) struct ErrorResponse {
    pub(crate) error: &'static str,
}

#[derive(Serialize, JsonSchema)]
pub(crate) struct ErrorDetail {
    pub(crate) detail: &'static str,
}

#[derive(Deserialize, JsonSchema)]
pub(crate) struct ItemRequest {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) brand: String,
    pub(crate) price: f64,
}

#[derive(Serialize, JsonSchema)]
pub(crate) struct ItemResponse {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) brand: String,
    pub(crate) price: f64,
}

#[derive(Serialize, JsonSchema)]
pub(crate) struct ItemDeletedResponse {
    pub(crate) message: &'static str,
}

#[derive(Serialize, JsonSchema)]
pub(crate) struct TotalSalesResponse {
    pub(crate) brand: String,
    pub(crate) total_sales: f64,
}
