use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub app: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok", app: "recase_core" })
}
