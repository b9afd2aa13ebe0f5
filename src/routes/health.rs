use crate::models::responses::HealthResponse;
use crate::models::storage::Backend;
use axum::{extract::State, response::Json};

pub async fn health_check(State(backend): State<Backend>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "books-service".to_string(),
        status: "running".to_string(),
        books: backend.count().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::storage::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_check_reports_book_count() {
        let backend: Backend = Arc::new(MemoryStore::seeded());

        let response = health_check(State(backend)).await;

        assert_eq!(response.status, "running");
        assert_eq!(response.books, 3);
    }
}
