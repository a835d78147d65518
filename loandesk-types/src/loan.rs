use serde::{Deserialize, Serialize};

use crate::book::{Book, BookSnapshot};

/// A loan links one customer to one borrowed book. The `original_*`
/// fields are the book attributes snapshotted at loan creation; they
/// are the source of truth when the book is reconstructed after the
/// loan is deleted, since the live book record is removed from the
/// inventory for the duration of the loan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Loan {
    pub id: i64,
    pub customer_name: String,
    pub book_name: String,
    pub loan_date: String,
    pub return_date: String,
    pub original_author: String,
    pub original_year_published: i32,
    pub original_book_type: String,
}

impl Loan {
    #[must_use]
    pub fn book_snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            name: self.book_name.clone(),
            author: self.original_author.clone(),
            year_published: self.original_year_published,
            book_type: self.original_book_type.clone(),
        }
    }
}

/// Entry returned by the loan list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoanSummary {
    pub customer_name: String,
    pub book_name: String,
    pub loan_date: String,
    pub return_date: String,
}

/// A loan together with the referenced book's freshly fetched details.
/// `book_details` is `None` when the book lookup fails, which is
/// expected while the book is out on loan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedLoan {
    pub loan: Loan,
    pub book_details: Option<Book>,
}
