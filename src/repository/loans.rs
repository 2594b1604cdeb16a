//! Loans repository for the borrowed-books ledger
//!
//! The borrow and return write pairs (ledger row + book quantity) run inside
//! a single transaction so the catalog counter cannot drift from the ledger
//! on partial failure. Quantity updates are single UPDATE statements, never
//! read-modify-write, so concurrent borrows cannot lose updates.

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::loan::LoanRecord,
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All loan records for a borrower
    pub async fn list_for_user(&self, email: &str) -> AppResult<Vec<LoanRecord>> {
        let records = sqlx::query_as::<_, LoanRecord>(
            "SELECT * FROM borrowed_books WHERE user_email = $1 ORDER BY borrow_date",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Loan records for a borrower narrowed to one book; used to check
    /// whether that borrow is currently active
    pub async fn list_for_user_and_book(
        &self,
        email: &str,
        book_id: Uuid,
    ) -> AppResult<Vec<LoanRecord>> {
        let records = sqlx::query_as::<_, LoanRecord>(
            "SELECT * FROM borrowed_books WHERE user_email = $1 AND book_id = $2",
        )
        .bind(email)
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Borrow a book: insert a loan record stamped with today's date and
    /// take one copy off the shelf, as one transaction.
    ///
    /// Borrowing the same book twice is allowed and creates two independent
    /// records. The decrement is guarded, so a book with no available copies
    /// rolls the whole borrow back.
    pub async fn borrow(&self, book_id: Uuid, user_email: &str) -> AppResult<LoanRecord> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, LoanRecord>(
            r#"
            INSERT INTO borrowed_books (id, book_id, user_email, borrow_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(book_id)
        .bind(user_email)
        .bind(Utc::now().date_naive())
        .fetch_one(&mut *tx)
        .await?;

        let updated =
            sqlx::query("UPDATE books SET quantity = quantity - 1 WHERE id = $1 AND quantity > 0")
                .bind(book_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();

        if updated == 0 {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;
            tx.rollback().await?;
            return Err(if exists {
                AppError::Unavailable(format!("Book {} has no copies available", book_id))
            } else {
                AppError::NotFound(format!("Book with id {} not found", book_id))
            });
        }

        tx.commit().await?;
        Ok(record)
    }

    /// Return a borrowed book: delete the loan record and put one copy back,
    /// as one transaction.
    ///
    /// The delete filter binds on both the record id and the borrower email,
    /// so a caller cannot return another user's loan by guessing an id. The
    /// book to re-stock is the caller-supplied catalog id; it is not checked
    /// against the deleted record, and re-stocking a missing book is a no-op.
    /// Returns the number of deleted records (0 or 1).
    pub async fn return_loan(
        &self,
        loan_id: Uuid,
        book_id: Uuid,
        user_email: &str,
    ) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM borrowed_books WHERE id = $1 AND user_email = $2")
            .bind(loan_id)
            .bind(user_email)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted > 0 {
            sqlx::query("UPDATE books SET quantity = quantity + 1 WHERE id = $1")
                .bind(book_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(deleted)
    }
}
