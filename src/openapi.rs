//! Machine-readable API contract (OpenAPI 3.1) for the book routes.

use crate::models::book::{ApiSchema, Book, BookInput};
use serde_json::{json, Value};

pub const TITLE: &str = "Books API";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn schema_ref<T: ApiSchema>() -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", T::NAME) })
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": json_content(json!({ "$ref": "#/components/schemas/ErrorResponse" }))
    })
}

fn book_id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "title": "Id" }
    })
}

fn book_body() -> Value {
    json!({
        "required": true,
        "content": json_content(schema_ref::<BookInput>())
    })
}

fn book_response() -> Value {
    json!({
        "description": "Successful Response",
        "content": json_content(schema_ref::<Book>())
    })
}

fn list_operation() -> Value {
    let parameters = json!([
        {
            "name": "author",
            "in": "query",
            "required": false,
            "description": "Case-insensitive substring of the author name",
            "schema": { "type": "string" }
        },
        {
            "name": "year",
            "in": "query",
            "required": false,
            "description": "Exact publication year",
            "schema": { "type": "integer" }
        }
    ]);
    let books = json!({ "type": "array", "items": schema_ref::<Book>() });

    json!({
        "summary": "List books",
        "operationId": "list_books",
        "parameters": parameters,
        "responses": {
            "200": { "description": "Successful Response", "content": json_content(books) },
            "422": error_response("Validation Error")
        }
    })
}

fn create_operation() -> Value {
    json!({
        "summary": "Create book",
        "operationId": "create_book",
        "requestBody": book_body(),
        "responses": {
            "201": book_response(),
            "422": error_response("Validation Error")
        }
    })
}

fn get_operation() -> Value {
    json!({
        "summary": "Get book",
        "operationId": "get_book",
        "parameters": [book_id_parameter()],
        "responses": {
            "200": book_response(),
            "404": error_response("Book not found"),
            "422": error_response("Validation Error")
        }
    })
}

fn update_operation() -> Value {
    json!({
        "summary": "Update book",
        "operationId": "update_book",
        "parameters": [book_id_parameter()],
        "requestBody": book_body(),
        "responses": {
            "200": book_response(),
            "404": error_response("Book not found"),
            "422": error_response("Validation Error")
        }
    })
}

fn delete_operation() -> Value {
    json!({
        "summary": "Delete book",
        "operationId": "delete_book",
        "parameters": [book_id_parameter()],
        "responses": {
            "204": { "description": "Successful Response" },
            "404": error_response("Book not found"),
            "422": error_response("Validation Error")
        }
    })
}

fn schemas() -> Value {
    let error = json!({
        "title": "ErrorResponse",
        "type": "object",
        "properties": { "detail": { "type": "string", "title": "Detail" } },
        "required": ["detail"]
    });

    json!({
        (BookInput::NAME): BookInput::schema(),
        (Book::NAME): Book::schema(),
        "ErrorResponse": error
    })
}

pub fn document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": { "title": TITLE, "version": VERSION },
        "paths": {
            "/books": { "get": list_operation(), "post": create_operation() },
            "/books/{id}": {
                "get": get_operation(),
                "put": update_operation(),
                "delete": delete_operation()
            }
        },
        "components": { "schemas": schemas() }
    })
}
