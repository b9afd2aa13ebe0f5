use crate::error::{ApiError, ApiResult};
use crate::models::book::{Book, BookFilter, BookInput};
use crate::models::storage::Backend;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};

fn book_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))
}

fn book_input(body: Result<Json<BookInput>, JsonRejection>) -> ApiResult<BookInput> {
    body.map(|Json(input)| input).map_err(|rejection| {
        warn!("Rejected book payload: {}", rejection.body_text());
        ApiError::Validation(rejection.body_text())
    })
}

pub async fn list_books(
    State(backend): State<Backend>,
    params: Result<Query<BookFilter>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Query(filter) =
        params.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    Ok(Json(backend.list(&filter).await))
}

pub async fn get_book(
    State(backend): State<Backend>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let id = book_id(path)?;

    Ok(Json(backend.get(id).await?))
}

pub async fn create_book(
    State(backend): State<Backend>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let input = book_input(body)?;

    let book = backend.create(input).await;
    info!("Created book {} ({})", book.id, book.title);

    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update_book(
    State(backend): State<Backend>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let id = book_id(path)?;
    let input = book_input(body)?;

    let book = backend.replace(id, input).await?;
    info!("Updated book {}", id);

    Ok(Json(book))
}

pub async fn delete_book(
    State(backend): State<Backend>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = book_id(path)?;

    backend.delete(id).await?;
    info!("Deleted book {}", id);

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::models::storage::{Backend, MemoryStore};
    use crate::routes::router;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let backend: Backend = Arc::new(MemoryStore::seeded());
        router(backend)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    #[tokio::test]
    async fn test_list_books() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/books", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(3));
        assert_eq!(body[0]["title"], "1984");
    }

    #[tokio::test]
    async fn test_list_books_with_filters() {
        let app = app();

        let (_, by_author) = send(&app, Method::GET, "/books?author=orwell", None).await;
        let (_, by_year) = send(&app, Method::GET, "/books?year=1937", None).await;

        assert_eq!(
            by_author,
            json!([{"id": 1, "title": "1984", "author": "George Orwell", "year": 1949}])
        );
        assert_eq!(by_year[0]["title"], "The Hobbit");
        assert_eq!(by_year.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_list_books_rejects_non_integer_year() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/books?year=soon", None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_get_missing_book() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/books/99", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Book not found"}));
    }

    #[tokio::test]
    async fn test_get_with_non_integer_id() {
        let app = app();

        let (status, _) = send(&app, Method::GET, "/books/abc", None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/books",
            Some(r#"{"id":100,"title":"Dune","author":"Frank Herbert","year":1965}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 4);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_payloads() {
        let app = app();
        let payloads = [
            r#"{"title":"Dune","author":"Frank Herbert"}"#,
            r#"{"title":"Dune","author":"Frank Herbert","year":"1965"}"#,
            r#"{"title":42,"author":"Frank Herbert","year":1965}"#,
            r#"{"title":"Dune","#,
        ];

        for payload in payloads {
            let (status, body) = send(&app, Method::POST, "/books", Some(payload)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "payload {}", payload);
            assert!(body["detail"].is_string());
        }

        let (_, books) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(books.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_update_book() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/books/3",
            Some(r#"{"title":"The Silmarillion","author":"J.R.R. Tolkien","year":1977}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": 3, "title": "The Silmarillion", "author": "J.R.R. Tolkien", "year": 1977})
        );
        let (_, fetched) = send(&app, Method::GET, "/books/3", None).await;
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/books/99",
            Some(r#"{"title":"x","author":"y","year":1}"#),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Book not found");
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let app = app();

        let (status, _) = send(&app, Method::PUT, "/books/99", Some(r#"{"title":"x"}"#)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_delete_book() {
        let app = app();

        let (status, body) = send(&app, Method::DELETE, "/books/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, Method::DELETE, "/books/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
