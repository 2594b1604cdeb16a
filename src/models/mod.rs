//! Data models for Librario

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookFields, BookPayload};
pub use loan::LoanRecord;
pub use user::UserClaims;
