pub mod books;
pub mod customers;
pub mod loans;

use serde::{Deserialize, Serialize};

/// Body of a successful mutation, e.g. `{"message": "Loan added successfully"}`.
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
