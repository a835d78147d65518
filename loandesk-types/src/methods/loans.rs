use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::loan::{Loan, LoanSummary};

/// Body of `POST /loans/create`. Dates are canonical RFC 3339
/// timestamps; the customer's detail record is attached so the server
/// does not have to look it up again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateLoanParams {
    pub customer_name: String,
    pub book_name: String,
    pub loan_date: DateTime<Utc>,
    pub return_date: DateTime<Utc>,
    pub csrf_token: String,
    pub customer_details: Customer,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ListLoansResponse {
    pub loans: Vec<LoanSummary>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoanDetailsResponse {
    pub loan: Loan,
}
