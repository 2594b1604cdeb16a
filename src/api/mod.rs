//! API handlers for the Librario REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::{error::AppError, AppState};

/// Extractor for the authenticated caller, read from the JWT login cookie
pub struct AuthenticatedUser(pub crate::models::user::UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        // The token travels in an http-only cookie, not an Authorization header
        let token = jar
            .get(&state.config.auth.cookie_name)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::Unauthorized("Missing login cookie".to_string()))?;

        let claims = state.services.auth.verify_token(&token)?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Parse a caller-supplied identifier; malformed input is a 400, not a crash
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId(format!("'{}' is not a valid id", raw)))
}
