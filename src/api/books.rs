//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
};

use super::{parse_id, AuthenticatedUser};

#[derive(Deserialize)]
pub struct ListBooksParams {
    pub filter: Option<String>,
}

#[derive(Deserialize)]
pub struct CategoryParams {
    pub name: Option<String>,
}

/// List the catalog, optionally restricted to books with copies available
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("filter" = Option<String>, Query, description = "Pass 'true' to list only books with quantity > 0")
    ),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(params): Query<ListBooksParams>,
) -> AppResult<Json<Vec<Book>>> {
    // Only the literal string "true" enables the filter; anything else
    // falls through to the unfiltered listing.
    let only_available = params.filter.as_deref() == Some("true");
    let books = state.services.catalog.list_books(only_available).await?;
    Ok(Json(books))
}

/// Top-rated books (rating > 4.7, at most 6)
#[utoipa::path(
    get,
    path = "/books/popular",
    tag = "books",
    responses(
        (status = 200, description = "Popular books", body = Vec<Book>)
    )
)]
pub async fn popular_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.popular_books().await?;
    Ok(Json(books))
}

/// Books in an exact, case-sensitive category
#[utoipa::path(
    get,
    path = "/books/category",
    tag = "books",
    params(
        ("name" = Option<String>, Query, description = "Category name, matched exactly")
    ),
    responses(
        (status = 200, description = "Books in the category", body = Vec<Book>)
    )
)]
pub async fn books_by_category(
    State(state): State<crate::AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<Vec<Book>>> {
    // A missing name matches no books rather than erroring
    let books = match params.name.as_deref() {
        Some(name) => state.services.catalog.books_in_category(name).await?,
        None => Vec::new(),
    };
    Ok(Json(books))
}

/// Get a single book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("cookie_auth" = [])),
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_id(&id)?;
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Upsert the full field set of the book at the given id
#[utoipa::path(
    post,
    path = "/books/update/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Stored book", body = Book),
        (status = 400, description = "Malformed id or invalid numeric field", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> AppResult<Json<Book>> {
    let id = parse_id(&id)?;
    let book = state.services.catalog.upsert_book(id, payload).await?;
    Ok(Json(book))
}

/// Add a new book under a fresh server-generated id
#[utoipa::path(
    post,
    path = "/book/add",
    tag = "books",
    security(("cookie_auth" = [])),
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid numeric field", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.add_book(payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}
