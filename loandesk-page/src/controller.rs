use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tokio::sync::Mutex;
use tracing::{error, info};

use loandesk_sdk::Error;
use loandesk_types::loan::EnrichedLoan;
use loandesk_types::methods::loans::CreateLoanParams;

use crate::service::LoanService;
use crate::view::{Dropdown, Field, PageView};

/// Drives the loan page: populates the two dropdowns on load and
/// handles the add/edit/delete actions. Each user action holds its own
/// guard while a request is in flight, so a double trigger cannot
/// issue duplicate requests.
pub struct PageController<S, V> {
    service: S,
    view: Mutex<V>,
    submit_guard: Mutex<()>,
    edit_guard: Mutex<()>,
    delete_guard: Mutex<()>,
}

impl<S, V> PageController<S, V>
where
    S: LoanService,
    V: PageView,
{
    pub fn new(service: S, view: V) -> Self {
        Self {
            service,
            view: Mutex::new(view),
            submit_guard: Mutex::new(()),
            edit_guard: Mutex::new(()),
            delete_guard: Mutex::new(()),
        }
    }

    /// The page surface, for hosts that need to read it back.
    pub fn view(&self) -> &Mutex<V> {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    /// Initial page load. Books are fetched and rendered before
    /// customers; the original page kept this ordering and it stays.
    /// Failures are logged and leave the affected dropdown empty.
    pub async fn init(&self) {
        match self.service.list_books().await {
            Ok(books) => {
                let names: Vec<String> = books.into_iter().map(|book| book.name).collect();
                self.view.lock().await.set_dropdown(Dropdown::BookName, &names);
            }
            Err(err) => error!("error fetching books: {err}"),
        }

        match self.service.list_customers().await {
            Ok(customers) => {
                let names: Vec<String> = customers
                    .into_iter()
                    .map(|customer| customer.name)
                    .collect();
                self.view
                    .lock()
                    .await
                    .set_dropdown(Dropdown::CustomerName, &names);
            }
            Err(err) => error!("error fetching customers: {err}"),
        }
    }

    /// The add-loan button. Reads the form, normalizes the dates,
    /// attaches the customer's detail record, and posts the loan. The
    /// create request is never sent when the detail lookup fails.
    pub async fn submit_loan(&self) {
        let Ok(_guard) = self.submit_guard.try_lock() else {
            info!("submit already in flight, ignoring");
            return;
        };

        let (customer_name, book_name, raw_loan_date, raw_return_date, csrf_token) = {
            let view = self.view.lock().await;
            (
                view.field(Field::CustomerName),
                view.field(Field::BookName),
                view.field(Field::LoanDate),
                view.field(Field::ReturnDate),
                view.field(Field::CsrfToken),
            )
        };

        let Some(loan_date) = parse_form_date(&raw_loan_date) else {
            self.alert(&format!("Invalid loan date: {raw_loan_date}")).await;
            return;
        };
        let Some(return_date) = parse_form_date(&raw_return_date) else {
            self.alert(&format!("Invalid return date: {raw_return_date}"))
                .await;
            return;
        };

        let customer_details = match self.service.customer_details(&customer_name).await {
            Ok(customer) => customer,
            Err(err) => {
                error!("error fetching customer details: {err}");
                self.alert(&format!("Error adding loan: {err}")).await;
                return;
            }
        };

        let params = CreateLoanParams {
            customer_name,
            book_name,
            loan_date,
            return_date,
            csrf_token,
            customer_details,
        };

        match self.service.create_loan(&params).await {
            Ok(()) => {
                info!("loan added successfully");
                self.alert("Loan added successfully.").await;
            }
            Err(err) => {
                error!("error adding loan: {err}");
                self.alert(&format!("Error adding loan: {err}")).await;
            }
        }
    }

    /// The edit button on a loan row. Pre-fills the form with the
    /// loan's values for in-place editing; nothing is mutated here.
    pub async fn edit_loan(&self, loan_id: i64) {
        let Ok(_guard) = self.edit_guard.try_lock() else {
            info!("edit already in flight, ignoring");
            return;
        };

        match self.fetch_loan_details(loan_id).await {
            Ok(details) => {
                let loan = details.loan;
                let mut view = self.view.lock().await;
                view.set_field(Field::CustomerName, &loan.customer_name);
                view.set_field(Field::BookName, &loan.book_name);
                view.set_field(Field::LoanDate, &loan.loan_date);
                view.set_field(Field::ReturnDate, &loan.return_date);
            }
            Err(err) => error!("error editing loan {loan_id}: {err}"),
        }
    }

    /// The delete button on a loan row. Deletes the loan, drops the
    /// row, and returns the book to the inventory using the snapshot
    /// taken when the loan was created.
    pub async fn delete_loan(&self, loan_id: i64) {
        let Ok(_guard) = self.delete_guard.try_lock() else {
            info!("delete already in flight, ignoring");
            return;
        };

        let details = match self.fetch_loan_details(loan_id).await {
            Ok(details) => details,
            Err(err) => {
                self.alert(&format!("Error deleting loan: {err}")).await;
                return;
            }
        };

        let snapshot = details.loan.book_snapshot();
        if let Err(err) = self.service.delete_loan(loan_id, &snapshot).await {
            error!("error deleting loan {loan_id}: {err}");
            self.alert(&format!("Error deleting loan: {err}")).await;
            return;
        }

        info!("loan {loan_id} deleted successfully");
        {
            let mut view = self.view.lock().await;
            view.remove_loan_row(loan_id);
            view.alert("Loan deleted successfully.");
        }

        // Restock: the book record was removed when the loan was made.
        if let Err(err) = self.service.create_book(&snapshot).await {
            error!("error restocking book {}: {err}", snapshot.name);
            self.alert(&format!("Error restocking book: {err}")).await;
        }
    }

    /// Loan record enriched with the referenced book's fresh details.
    /// A failed loan lookup is logged and propagated so the caller is
    /// the single reporting point; a failed book lookup is logged and
    /// leaves `book_details` empty, since the book record is usually
    /// absent while out on loan.
    async fn fetch_loan_details(&self, loan_id: i64) -> Result<EnrichedLoan, Error> {
        let loan = match self.service.loan_details(loan_id).await {
            Ok(loan) => loan,
            Err(err) => {
                error!("error fetching loan details for {loan_id}: {err}");
                return Err(err);
            }
        };

        let book_details = match self.service.book_details(&loan.book_name).await {
            Ok(book) => Some(book),
            Err(err) => {
                error!("error fetching book details for {}: {err}", loan.book_name);
                None
            }
        };

        Ok(EnrichedLoan { loan, book_details })
    }

    async fn alert(&self, message: &str) {
        self.view.lock().await.alert(message);
    }
}

/// Accepts the date-input format (`YYYY-MM-DD`) or a full RFC 3339
/// timestamp, normalized to a UTC timestamp either way.
fn parse_form_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    raw.parse::<NaiveDate>()
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}
