//! Catalog management service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
    repository::Repository,
};

/// Rating threshold for the popular listing (strictly greater than)
const POPULAR_MIN_RATING: f64 = 4.7;
/// Maximum number of books the popular listing returns
const POPULAR_LIMIT: i64 = 6;

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the catalog, optionally restricted to books with copies available
    pub async fn list_books(&self, only_available: bool) -> AppResult<Vec<Book>> {
        if only_available {
            self.repository.books.list_available().await
        } else {
            self.repository.books.list_all().await
        }
    }

    /// Top-rated books
    pub async fn popular_books(&self) -> AppResult<Vec<Book>> {
        self.repository
            .books
            .list_popular(POPULAR_MIN_RATING, POPULAR_LIMIT)
            .await
    }

    /// Books in an exact category
    pub async fn books_in_category(&self, category: &str) -> AppResult<Vec<Book>> {
        self.repository.books.list_by_category(category).await
    }

    /// Get a single book by id
    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Replace the book at `id` with the payload's field set, creating it
    /// when absent
    pub async fn upsert_book(&self, id: Uuid, payload: BookPayload) -> AppResult<Book> {
        let fields = payload.normalized()?;
        self.repository.books.upsert(id, &fields).await
    }

    /// Add a new book under a fresh id
    pub async fn add_book(&self, payload: BookPayload) -> AppResult<Book> {
        let fields = payload.normalized()?;
        self.repository.books.insert(&fields).await
    }
}
