//! Borrow and return endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::loan::LoanRecord};

use super::{parse_id, AuthenticatedUser};

#[derive(Deserialize, ToSchema)]
pub struct BorrowRequest {
    /// Borrower email; when present it must match the authenticated identity
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnResponse {
    /// Number of loan records deleted (0 or 1)
    pub deleted_count: u64,
}

#[derive(Deserialize)]
pub struct ReturnParams {
    /// Loan record id
    #[serde(rename = "bbId")]
    pub bb_id: String,
    /// Catalog book id to put a copy back on
    #[serde(rename = "cbId")]
    pub cb_id: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct BorrowedParams {
    pub email: Option<String>,
    pub validate: Option<String>,
    #[serde(rename = "bookId")]
    pub book_id: Option<String>,
}

/// Borrow a book: create a loan record and take one copy off the shelf
#[utoipa::path(
    post,
    path = "/books/borrow/{id}",
    tag = "loans",
    security(("cookie_auth" = [])),
    params(
        ("id" = String, Path, description = "Book ID to borrow")
    ),
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Loan created", body = LoanRecord),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Email does not match the authenticated identity"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "No copies available")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    payload: Option<Json<BorrowRequest>>,
) -> AppResult<(StatusCode, Json<LoanRecord>)> {
    let book_id = parse_id(&id)?;

    // The loan is always recorded under the authenticated identity; a body
    // claiming a different email is rejected rather than trusted.
    if let Some(Json(request)) = payload {
        if let Some(email) = request.email.as_deref() {
            claims.require_self(Some(email))?;
        }
    }

    let record = state.services.loans.borrow(book_id, &claims.sub).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Return a borrowed book: delete the loan record and put one copy back
#[utoipa::path(
    get,
    path = "/return",
    tag = "loans",
    security(("cookie_auth" = [])),
    params(
        ("bbId" = String, Query, description = "Loan record ID"),
        ("cbId" = String, Query, description = "Catalog book ID"),
        ("email" = String, Query, description = "Borrower email, must match the authenticated identity")
    ),
    responses(
        (status = 200, description = "Deletion result", body = ReturnResponse),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Email does not match the authenticated identity")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(params): Query<ReturnParams>,
) -> AppResult<Json<ReturnResponse>> {
    claims.require_self(Some(&params.email))?;

    let loan_id = parse_id(&params.bb_id)?;
    let book_id = parse_id(&params.cb_id)?;

    let deleted_count = state
        .services
        .loans
        .return_loan(loan_id, book_id, &claims.sub)
        .await?;
    Ok(Json(ReturnResponse { deleted_count }))
}

/// List the caller's outstanding loans, optionally narrowed to one book
#[utoipa::path(
    get,
    path = "/user/borrowed",
    tag = "loans",
    security(("cookie_auth" = [])),
    params(
        ("email" = String, Query, description = "Borrower email, must match the authenticated identity"),
        ("validate" = Option<String>, Query, description = "Pass 'true' to narrow the listing to one book"),
        ("bookId" = Option<String>, Query, description = "Book ID to narrow to")
    ),
    responses(
        (status = 200, description = "Loan records", body = Vec<LoanRecord>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Email does not match the authenticated identity")
    )
)]
pub async fn user_borrowed(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(params): Query<BorrowedParams>,
) -> AppResult<Json<Vec<LoanRecord>>> {
    claims.require_self(params.email.as_deref())?;

    let book_id = if params.validate.as_deref() == Some("true") {
        match params.book_id.as_deref() {
            Some(raw) => Some(parse_id(raw)?),
            None => None,
        }
    } else {
        None
    };

    let records = state
        .services
        .loans
        .borrowed_for_user(&claims.sub, book_id)
        .await?;
    Ok(Json(records))
}
