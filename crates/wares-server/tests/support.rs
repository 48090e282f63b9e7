#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use std::time::Instant;
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;
use wares_db::{connect_sqlite_with_max, migrate, SqlitePool};
use wares_server::app::{build_router, AppState};

pub struct TestApp {
    pub app: axum::Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("wares_server=debug"))
                .with_test_writer()
                .try_init();
        });

        let db_path = std::env::temp_dir().join(format!(
            "wares-server-test-{}.sqlite",
            Uuid::now_v7().simple()
        ));
        let db_url = format!("sqlite://{}", db_path.display());
        let pool = connect_sqlite_with_max(&db_url, 1).await.expect("sqlite");
        migrate(&pool).await.expect("migrate");

        let state = AppState {
            db: pool.clone(),
            started_at: Instant::now(),
            max_body_bytes: 1024 * 1024,
        };
        let app = build_router(state);
        Self { app, pool }
    }

    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("encode json")))
            .expect("request");
        self.send(request).await
    }

    pub async fn send_empty(&self, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send_empty(Method::GET, uri).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            // Extractor rejections come back as plain text, not JSON.
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }
}
