//! Identity token service
//!
//! Issues and verifies the signed identity token carried by the login
//! cookie. There is deliberately no password step: the token endpoint turns
//! a claimed email into a signed identity, and protected routes only trust
//! what the signature vouches for.

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::UserClaims,
};

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Issue a signed token for the given email
    pub fn issue_token(&self, email: &str) -> AppResult<String> {
        let claims = UserClaims::new(email, self.config.jwt_expiration_hours);
        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Verify a token and yield the caller's claims
    pub fn verify_token(&self, token: &str) -> AppResult<UserClaims> {
        UserClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Unauthorized(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(AuthConfig::default())
    }

    #[test]
    fn issued_tokens_verify() {
        let auth = service();
        let token = auth.issue_token("a@x.com").unwrap();
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "a@x.com");
    }

    #[test]
    fn garbage_tokens_are_unauthorized() {
        let err = service().verify_token("not-a-jwt").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
