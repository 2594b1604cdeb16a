//! Loan (borrowed book) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One outstanding borrow of one book by one user.
///
/// Records are created on borrow and deleted again on return; there is no
/// archive of past loans.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanRecord {
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_email: String,
    /// Calendar date of the borrow (UTC, no time of day)
    pub borrow_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_record_serializes_with_camel_case_fields() {
        let record = LoanRecord {
            id: Uuid::nil(),
            book_id: Uuid::nil(),
            user_email: "a@x.com".to_string(),
            borrow_date: NaiveDate::from_ymd_opt(2026, 8, 21).unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["bookId"], json["id"]);
        assert_eq!(json["userEmail"], "a@x.com");
        assert_eq!(json["borrowDate"], "2026-08-21");
    }
}
