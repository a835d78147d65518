use std::sync::Arc;

pub use loandesk_types::book::BookSnapshot;
pub use loandesk_types::loan::{Loan, LoanSummary};
pub use loandesk_types::methods::loans::{
    CreateLoanParams, ListLoansResponse, LoanDetailsResponse,
};
pub use loandesk_types::methods::MessageResponse;

use crate::{base::BaseClient, Error};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<ListLoansResponse, Error> {
        self.client.get("/loans/json".into()).await
    }

    pub async fn details(&self, loan_id: i64) -> Result<LoanDetailsResponse, Error> {
        self.client.get(format!("/loans/{loan_id}/details")).await
    }

    pub async fn create(&self, params: &CreateLoanParams) -> Result<MessageResponse, Error> {
        self.client.post("/loans/create".into(), params).await
    }

    /// The body carries the book snapshot so the server can hand it to
    /// whoever restocks the book afterwards.
    pub async fn delete(&self, loan_id: i64, snapshot: &BookSnapshot) -> Result<(), Error> {
        self.client
            .post_no_content(format!("/loans/{loan_id}/delete"), snapshot)
            .await
    }
}
