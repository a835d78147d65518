use serde::{Deserialize, Serialize};

use crate::customer::{Customer, CustomerRef};

#[derive(Debug, Deserialize, Serialize)]
pub struct ListCustomersResponse {
    pub customers: Vec<CustomerRef>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CustomerDetailsResponse {
    pub customer: Customer,
}
