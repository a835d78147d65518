use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::{Args, Subcommand};
use loandesk_sdk::{loans::CreateLoanParams, Client};

use crate::handle_resp;

#[derive(Args, Debug)]
pub struct Loans {
    #[clap(subcommand)]
    subcommand: LoansSubcommand,
}

/// Parse a `YYYY-MM-DD` date into a midnight-UTC timestamp.
fn parse_date(s: &str) -> Result<DateTime<Utc>, String> {
    let date = s
        .parse::<NaiveDate>()
        .map_err(|_| format!("invalid date `{s}`, expected YYYY-MM-DD"))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

#[derive(Subcommand, Debug)]
pub enum LoansSubcommand {
    #[command(about = "list loans")]
    List,
    #[command(about = "show details for one loan")]
    Details {
        #[arg(help = "id of the loan")]
        id: i64,
    },
    #[command(about = "loan a book to a customer")]
    Create {
        #[arg(help = "name of the customer")]
        customer: String,
        #[arg(help = "name of the book")]
        book: String,
        #[arg(short, long, value_parser = parse_date)]
        loan_date: DateTime<Utc>,
        #[arg(short, long, value_parser = parse_date)]
        return_date: DateTime<Utc>,
        #[arg(long, env = "LOANDESK_CSRF_TOKEN", default_value = "")]
        csrf_token: String,
    },
    #[command(about = "delete a loan and return the book to the inventory")]
    Delete {
        #[arg(help = "id of the loan")]
        id: i64,
    },
}

impl Loans {
    pub async fn handle(self, sdk: &Client) {
        match self.subcommand {
            LoansSubcommand::List => {
                let resp = sdk.loans.list().await;
                handle_resp(resp);
            }
            LoansSubcommand::Details { id } => {
                let resp = sdk.loans.details(id).await;
                handle_resp(resp);
            }
            LoansSubcommand::Create {
                customer,
                book,
                loan_date,
                return_date,
                csrf_token,
            } => {
                // The customer's detail record rides along on the
                // create request, same as the loan page does it.
                let customer_details = match sdk.customers.details(&customer).await {
                    Ok(resp) => resp.customer,
                    Err(e) => {
                        println!("Error: {e}");
                        return;
                    }
                };
                let resp = sdk
                    .loans
                    .create(&CreateLoanParams {
                        customer_name: customer,
                        book_name: book,
                        loan_date,
                        return_date,
                        csrf_token,
                        customer_details,
                    })
                    .await;
                handle_resp(resp);
            }
            LoansSubcommand::Delete { id } => {
                let loan = match sdk.loans.details(id).await {
                    Ok(resp) => resp.loan,
                    Err(e) => {
                        println!("Error: {e}");
                        return;
                    }
                };
                let snapshot = loan.book_snapshot();
                if let Err(e) = sdk.loans.delete(id, &snapshot).await {
                    println!("Error: {e}");
                    return;
                }
                println!("Loan {id} deleted");
                // Deleting a loan puts the book back on the shelf.
                let resp = sdk.books.create(&snapshot).await;
                handle_resp(resp);
            }
        }
    }
}
