use async_trait::async_trait;
use loandesk_sdk::Error;
use loandesk_types::book::{Book, BookRef, BookSnapshot};
use loandesk_types::customer::{Customer, CustomerRef};
use loandesk_types::loan::Loan;
use loandesk_types::methods::loans::CreateLoanParams;

/// The calls the page controller makes against the loan service.
/// Implemented for [`loandesk_sdk::Client`]; tests substitute a
/// recording fake.
#[async_trait]
pub trait LoanService {
    async fn list_books(&self) -> Result<Vec<BookRef>, Error>;

    async fn list_customers(&self) -> Result<Vec<CustomerRef>, Error>;

    async fn customer_details(&self, name: &str) -> Result<Customer, Error>;

    async fn book_details(&self, name: &str) -> Result<Book, Error>;

    async fn loan_details(&self, loan_id: i64) -> Result<Loan, Error>;

    async fn create_loan(&self, params: &CreateLoanParams) -> Result<(), Error>;

    async fn delete_loan(&self, loan_id: i64, snapshot: &BookSnapshot) -> Result<(), Error>;

    async fn create_book(&self, snapshot: &BookSnapshot) -> Result<(), Error>;
}

#[async_trait]
impl LoanService for loandesk_sdk::Client {
    async fn list_books(&self) -> Result<Vec<BookRef>, Error> {
        self.books.list().await.map(|resp| resp.books)
    }

    async fn list_customers(&self) -> Result<Vec<CustomerRef>, Error> {
        self.customers.list().await.map(|resp| resp.customers)
    }

    async fn customer_details(&self, name: &str) -> Result<Customer, Error> {
        self.customers.details(name).await.map(|resp| resp.customer)
    }

    async fn book_details(&self, name: &str) -> Result<Book, Error> {
        self.books.details(name).await.map(|resp| resp.book)
    }

    async fn loan_details(&self, loan_id: i64) -> Result<Loan, Error> {
        self.loans.details(loan_id).await.map(|resp| resp.loan)
    }

    async fn create_loan(&self, params: &CreateLoanParams) -> Result<(), Error> {
        self.loans.create(params).await.map(|_| ())
    }

    async fn delete_loan(&self, loan_id: i64, snapshot: &BookSnapshot) -> Result<(), Error> {
        self.loans.delete(loan_id, snapshot).await
    }

    async fn create_book(&self, snapshot: &BookSnapshot) -> Result<(), Error> {
        self.books.create(snapshot).await.map(|_| ())
    }
}
