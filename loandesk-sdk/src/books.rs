use std::sync::Arc;

pub use loandesk_types::book::{Book, BookRef, BookSnapshot};
pub use loandesk_types::methods::books::{BookDetailsResponse, ListBooksResponse};
pub use loandesk_types::methods::MessageResponse;

use crate::{base::BaseClient, Error};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<ListBooksResponse, Error> {
        self.client.get("/loans/books/json".into()).await
    }

    pub async fn details(&self, name: &str) -> Result<BookDetailsResponse, Error> {
        self.client.get(format!("/loans/books/details/{name}")).await
    }

    /// Put a book (back) on the shelf. The loan page calls this after
    /// deleting a loan to return the borrowed book to the inventory.
    pub async fn create(&self, params: &BookSnapshot) -> Result<MessageResponse, Error> {
        self.client.post("/books/create".into(), params).await
    }
}
