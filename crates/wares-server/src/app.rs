use axum::{extract::DefaultBodyLimit, Router};
use std::time::Instant;

use wares_db::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub started_at: Instant,
    pub max_body_bytes: usize,
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.max_body_bytes;
    crate::http::router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
}
