//! Books repository for catalog database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All books in the catalog
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Books with at least one copy available to lend
    pub async fn list_available(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE quantity > 0")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Books rated strictly above `min_rating`, at most `limit` of them
    pub async fn list_popular(&self, min_rating: f64, limit: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE rating > $1 ORDER BY rating DESC LIMIT $2",
        )
        .bind(min_rating)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Exact, case-sensitive category match
    pub async fn list_by_category(&self, category: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE category = $1")
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Replace the mutable fields of the book at `id`, creating it if absent
    pub async fn upsert(&self, id: Uuid, fields: &BookFields) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, title, author, category, description, image, rating, quantity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                author = EXCLUDED.author,
                category = EXCLUDED.category,
                description = EXCLUDED.description,
                image = EXCLUDED.image,
                rating = EXCLUDED.rating,
                quantity = EXCLUDED.quantity
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.category)
        .bind(&fields.description)
        .bind(&fields.image)
        .bind(fields.rating)
        .bind(fields.quantity)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// Insert a new book under a fresh server-generated id
    pub async fn insert(&self, fields: &BookFields) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, title, author, category, description, image, rating, quantity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.category)
        .bind(&fields.description)
        .bind(&fields.image)
        .bind(fields.rating)
        .bind(fields.quantity)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }
}
