use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Types that can describe their JSON shape for the API contract.
pub trait ApiSchema {
    const NAME: &'static str;

    fn schema() -> Value;
}

/// Payload accepted by `POST /books` and `PUT /books/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
}

pub fn to_book(input: BookInput, id: i64) -> Book {
    Book {
        id,
        title: input.title,
        author: input.author,
        year: input.year,
    }
}

/// Identifier for the next created book: one past the highest stored id.
pub fn next_id(books: &[Book]) -> i64 {
    books.iter().map(|book| book.id).max().map_or(1, |max| max + 1)
}

/// Query parameters of `GET /books`. Both filters are ANDed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookFilter {
    pub author: Option<String>,
    pub year: Option<i32>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(ref author_filter) = self.author {
            if !author_filter.is_empty()
                && !book
                    .author
                    .to_lowercase()
                    .contains(&author_filter.to_lowercase())
            {
                return false;
            }
        }

        if let Some(year_filter) = self.year {
            if book.year != year_filter {
                return false;
            }
        }

        true
    }
}

impl ApiSchema for BookInput {
    const NAME: &'static str = "BookInput";

    fn schema() -> Value {
        json!({
            "title": "BookInput",
            "type": "object",
            "properties": {
                "title": { "type": "string", "title": "Title" },
                "author": { "type": "string", "title": "Author" },
                "year": { "type": "integer", "title": "Year" }
            },
            "required": ["title", "author", "year"]
        })
    }
}

impl ApiSchema for Book {
    const NAME: &'static str = "Book";

    fn schema() -> Value {
        let mut schema = BookInput::schema();
        schema["title"] = json!("Book");
        schema["properties"]["id"] = json!({ "type": "integer", "title": "Id" });
        schema["required"] = json!(["id", "title", "author", "year"]);
        schema
    }
}
