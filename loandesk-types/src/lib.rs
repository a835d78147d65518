#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod book;
pub mod customer;
pub mod loan;
pub mod methods;
