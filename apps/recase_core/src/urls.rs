use axum::{Router, routing::get};
use crate::views::{recase_convert::{convert_empty, convert_text}, recase_health::health};

pub fn router() -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/", get(convert_empty))
        .route("/{*text}", get(convert_text))
}
