//! Loan workflow service

use uuid::Uuid;

use crate::{error::AppResult, models::loan::LoanRecord, repository::Repository};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Loans of one borrower, optionally narrowed to a single book
    pub async fn borrowed_for_user(
        &self,
        email: &str,
        book_id: Option<Uuid>,
    ) -> AppResult<Vec<LoanRecord>> {
        match book_id {
            Some(book_id) => {
                self.repository
                    .loans
                    .list_for_user_and_book(email, book_id)
                    .await
            }
            None => self.repository.loans.list_for_user(email).await,
        }
    }

    /// Borrow a book for the authenticated borrower
    pub async fn borrow(&self, book_id: Uuid, user_email: &str) -> AppResult<LoanRecord> {
        self.repository.loans.borrow(book_id, user_email).await
    }

    /// Return a borrowed book; yields the number of deleted loan records
    pub async fn return_loan(
        &self,
        loan_id: Uuid,
        book_id: Uuid,
        user_email: &str,
    ) -> AppResult<u64> {
        self.repository
            .loans
            .return_loan(loan_id, book_id, user_email)
            .await
    }
}
