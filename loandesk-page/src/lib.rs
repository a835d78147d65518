//! Controller for the loan management page, split from its rendering
//! surface so the interaction logic is testable without a DOM. A host
//! page implements [`PageView`] over its concrete elements and hands it
//! to [`PageController`] together with a [`LoanService`].

pub mod controller;
pub mod service;
pub mod view;

pub use controller::PageController;
pub use service::LoanService;
pub use view::{Dropdown, Field, MemoryView, PageView};
