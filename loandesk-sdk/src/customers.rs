use std::sync::Arc;

pub use loandesk_types::customer::{Customer, CustomerRef};
pub use loandesk_types::methods::customers::{CustomerDetailsResponse, ListCustomersResponse};

use crate::{base::BaseClient, Error};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<ListCustomersResponse, Error> {
        self.client.get("/loans/customers/json".into()).await
    }

    pub async fn details(&self, name: &str) -> Result<CustomerDetailsResponse, Error> {
        self.client
            .get(format!("/loans/customers/details/{name}"))
            .await
    }
}
