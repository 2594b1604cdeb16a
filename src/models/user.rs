//! Identity claims carried by the login token

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims identifying the caller by email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// Borrower email address
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Build claims for an email, expiring after the given number of hours
    pub fn new(email: &str, expiration_hours: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: email.to_string(),
            exp: now + (expiration_hours as i64 * 3600),
            iat: now,
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    /// Loan data is scoped to the authenticated borrower: the email a caller
    /// asks about must be their own.
    pub fn require_self(&self, email: Option<&str>) -> Result<(), AppError> {
        match email {
            Some(e) if e == self.sub => Ok(()),
            _ => Err(AppError::Forbidden(
                "Loan data can only be accessed for your own account".to_string(),
            )),
        }
    }
}
