//! Login token endpoint
//!
//! `POST /jwt` turns a claimed email into a signed identity carried by an
//! http-only cookie. There is no password check; protected routes only trust
//! what the token's signature vouches for.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppResult;

#[derive(Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    /// Email address to issue an identity token for
    #[validate(email)]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct TokenResponse {
    pub success: bool,
}

/// Issue an identity token as an http-only cookie
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued, set as http-only cookie", body = TokenResponse),
        (status = 400, description = "Malformed email", body = crate::error::ErrorResponse)
    )
)]
pub async fn issue_token(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    Json(payload): Json<TokenRequest>,
) -> AppResult<(CookieJar, Json<TokenResponse>)> {
    payload.validate()?;

    let token = state.services.auth.issue_token(&payload.email)?;

    let cookie = Cookie::build((state.config.auth.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(state.config.auth.cookie_secure)
        .same_site(SameSite::Lax)
        .build();

    Ok((jar.add(cookie), Json(TokenResponse { success: true })))
}
