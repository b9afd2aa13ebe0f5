use crate::models::book::{next_id, to_book, Book, BookFilter, BookInput};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Book not found")]
    NotFound(i64),
}

#[async_trait]
pub trait BookStore {
    async fn list(&self, filter: &BookFilter) -> Vec<Book>;
    async fn get(&self, id: i64) -> Result<Book, StoreError>;
    async fn create(&self, input: BookInput) -> Book;
    async fn replace(&self, id: i64, input: BookInput) -> Result<Book, StoreError>;
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
    async fn count(&self) -> usize;
}

pub type Backend = Arc<dyn BookStore + Send + Sync>;

/// Books kept in process memory, in insertion order.
///
/// Each operation holds the lock for its whole lookup-and-mutate sequence,
/// so concurrent creates never hand out the same id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: Mutex<Vec<Book>>,
}

impl MemoryStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_books())
    }
}

pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            year: 1949,
        },
        Book {
            id: 2,
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            year: 1925,
        },
        Book {
            id: 3,
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            year: 1937,
        },
    ]
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list(&self, filter: &BookFilter) -> Vec<Book> {
        let books = self.books.lock().await;

        books
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect()
    }

    async fn get(&self, id: i64) -> Result<Book, StoreError> {
        let books = self.books.lock().await;

        books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, input: BookInput) -> Book {
        let mut books = self.books.lock().await;

        let book = to_book(input, next_id(&books));
        books.push(book.clone());
        book
    }

    async fn replace(&self, id: i64, input: BookInput) -> Result<Book, StoreError> {
        let mut books = self.books.lock().await;

        let slot = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))?;

        *slot = to_book(input, id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut books = self.books.lock().await;

        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(StoreError::NotFound(id))?;

        books.remove(index);
        Ok(())
    }

    async fn count(&self) -> usize {
        self.books.lock().await.len()
    }
}
