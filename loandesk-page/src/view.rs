use std::collections::{BTreeSet, HashMap};

/// The page surface the loan controller reads and writes. A browser
/// host maps these calls onto the concrete elements named by the
/// `element_id` accessors; tests use [`MemoryView`].
pub trait PageView {
    /// Clears any existing options, then appends one option per name,
    /// using the name as both value and label. Order is preserved.
    fn set_dropdown(&mut self, dropdown: Dropdown, names: &[String]);

    fn field(&self, field: Field) -> String;

    fn set_field(&mut self, field: Field, value: &str);

    /// Drops the `loan-{id}` row if it is present.
    fn remove_loan_row(&mut self, loan_id: i64);

    /// Blocking user-facing dialog.
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dropdown {
    BookName,
    CustomerName,
}

impl Dropdown {
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Dropdown::BookName => "book_name",
            Dropdown::CustomerName => "customer_name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CustomerName,
    BookName,
    LoanDate,
    ReturnDate,
    CsrfToken,
}

impl Field {
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Field::CustomerName => "customer_name",
            Field::BookName => "book_name",
            Field::LoanDate => "loan_date",
            Field::ReturnDate => "return_date",
            Field::CsrfToken => "csrf_token",
        }
    }
}

/// In-memory [`PageView`]. Dropdowns keep `(value, label)` pairs the
/// way an option element would; alerts are recorded in order.
#[derive(Debug, Default)]
pub struct MemoryView {
    dropdowns: HashMap<Dropdown, Vec<(String, String)>>,
    fields: HashMap<Field, String>,
    loan_rows: BTreeSet<i64>,
    alerts: Vec<String>,
}

impl MemoryView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A view whose loan table already shows rows for the given ids.
    pub fn with_loan_rows(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            loan_rows: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self, dropdown: Dropdown) -> &[(String, String)] {
        self.dropdowns.get(&dropdown).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn has_loan_row(&self, loan_id: i64) -> bool {
        self.loan_rows.contains(&loan_id)
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl PageView for MemoryView {
    fn set_dropdown(&mut self, dropdown: Dropdown, names: &[String]) {
        let options = names
            .iter()
            .map(|name| (name.clone(), name.clone()))
            .collect();
        self.dropdowns.insert(dropdown, options);
    }

    fn field(&self, field: Field) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_field(&mut self, field: Field, value: &str) {
        self.fields.insert(field, value.to_string());
    }

    fn remove_loan_row(&mut self, loan_id: i64) {
        self.loan_rows.remove(&loan_id);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
