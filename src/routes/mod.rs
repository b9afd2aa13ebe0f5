pub mod books;
pub mod health;
pub mod openapi;

use crate::models::storage::Backend;
use axum::{routing::get, Router};
use books::{create_book, delete_book, get_book, list_books, update_book};
use health::health_check;
use openapi::openapi_json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(backend: Backend) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/openapi.json", get(openapi_json))
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(backend)
}
