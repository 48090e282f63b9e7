use std::env;
use std::net::SocketAddr;

use tracing::warn;


#[derive(Debug)]
pub struct Settings {
    pub addr: SocketAddr,
    pub db_url: String,
    pub db_pool_max: u32,
    pub max_body_bytes: usize,
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        let addr = match env::var("WARES_ADDR") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!(event = "config_invalid", field = "WARES_ADDR", value = %value);
                "127.0.0.1:8080".parse().expect("default addr valid")
            }),
            Err(_) => "127.0.0.1:8080".parse().expect("default addr valid"),
        };
        let db_url = env::var("WARES_DB_URL").unwrap_or_else(|_| "sqlite://wares.db".to_string());
        let db_pool_max = env::var("WARES_DB_POOL_MAX")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(10);
        let max_body_bytes = env::var("WARES_MAX_BODY_BYTES")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        Self {
            addr,
            db_url,
            db_pool_max,
            max_body_bytes,
        }
    }
}

pub fn preflight(settings: &Settings) -> Result<(), Vec<String>> {
    let mut missing = Vec::new();
    if settings.db_url.is_empty() {
        missing.push("WARES_DB_URL must not be empty".to_string());
    }
    if settings.db_pool_max == 0 {
        missing.push("WARES_DB_POOL_MAX must be at least 1".to_string());
    }
    if settings.max_body_bytes == 0 {
        missing.push("WARES_MAX_BODY_BYTES must be at least 1".to_string());
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}
