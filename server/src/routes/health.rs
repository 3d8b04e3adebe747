use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

pub async fn health_handler() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}
