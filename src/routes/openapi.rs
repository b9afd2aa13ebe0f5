use crate::openapi::document;
use axum::response::Json;
use serde_json::Value;

pub async fn openapi_json() -> Json<Value> {
    Json(document())
}
