use std::sync::Arc;

use base::BaseClient;

pub(crate) mod base;
pub mod books;
pub mod customers;
pub mod error;
pub mod loans;

pub use error::{Error, StatusCode};

pub struct Client {
    pub books: crate::books::Client,
    pub customers: crate::customers::Client,
    pub loans: crate::loans::Client,
}

impl Client {
    pub fn new(api_url: impl ToString) -> Self {
        let base_client = Arc::new(BaseClient::new(api_url));

        let books = crate::books::Client::new(Arc::clone(&base_client));
        let customers = crate::customers::Client::new(Arc::clone(&base_client));
        let loans = crate::loans::Client::new(Arc::clone(&base_client));

        Self {
            books,
            customers,
            loans,
        }
    }
}
