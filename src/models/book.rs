//! Book model and catalog payload types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Book record from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub quantity: i64,
}

/// Numeric payload field that clients may send as a JSON number or as a
/// numeric string (HTML forms post everything as text).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Parse as a finite float
    pub fn as_f64(&self) -> Result<f64, String> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", s))?,
        };
        // f64::parse accepts "NaN" and "inf"; neither belongs in a record
        if !value.is_finite() {
            return Err(format!("'{}' is not a finite number", value));
        }
        Ok(value)
    }

    /// Parse as an integer, rejecting fractional and out-of-range values
    pub fn as_i64(&self) -> Result<i64, String> {
        match self {
            NumericInput::Number(n) if n.fract() == 0.0 && in_i64_range(*n) => Ok(*n as i64),
            NumericInput::Number(n) => Err(format!("'{}' is not an integer", n)),
            NumericInput::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("'{}' is not an integer", s)),
        }
    }
}

// Casting a float outside this range saturates instead of failing
fn in_i64_range(n: f64) -> bool {
    n >= i64::MIN as f64 && n < i64::MAX as f64
}

/// Full field set accepted by the add and update endpoints
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub image: String,
    pub title: String,
    pub author: String,
    pub category: String,
    #[schema(value_type = f64)]
    pub rating: NumericInput,
    pub description: String,
    #[schema(value_type = i64)]
    pub quantity: NumericInput,
}

/// Normalized book fields ready for storage
#[derive(Debug, Clone)]
pub struct BookFields {
    pub image: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: f64,
    pub description: String,
    pub quantity: i64,
}

impl BookPayload {
    /// Validate and normalize the numeric fields.
    ///
    /// Rating must parse as a float (the [0,5] range is not enforced);
    /// quantity must parse as a non-negative integer.
    pub fn normalized(self) -> AppResult<BookFields> {
        let rating = self
            .rating
            .as_f64()
            .map_err(|e| AppError::Validation(format!("rating: {}", e)))?;
        let quantity = self
            .quantity
            .as_i64()
            .map_err(|e| AppError::Validation(format!("quantity: {}", e)))?;
        if quantity < 0 {
            return Err(AppError::Validation(
                "quantity must not be negative".to_string(),
            ));
        }

        Ok(BookFields {
            image: self.image,
            title: self.title,
            author: self.author,
            category: self.category,
            rating,
            description: self.description,
            quantity,
        })
    }
}
