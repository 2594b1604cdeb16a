//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health, loans};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Librario API",
        version = "0.1.0",
        description = "Book catalog and lending REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::greeting,
        health::health_check,
        // Auth
        auth::issue_token,
        // Books
        books::list_books,
        books::popular_books,
        books::books_by_category,
        books::get_book,
        books::update_book,
        books::add_book,
        // Loans
        loans::borrow_book,
        loans::return_book,
        loans::user_borrowed,
    ),
    components(
        schemas(
            // Auth
            auth::TokenRequest,
            auth::TokenResponse,
            // Books
            crate::models::book::Book,
            crate::models::book::BookPayload,
            // Loans
            crate::models::loan::LoanRecord,
            loans::BorrowRequest,
            loans::ReturnResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Login token endpoint"),
        (name = "books", description = "Book catalog"),
        (name = "loans", description = "Borrow and return workflow")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
