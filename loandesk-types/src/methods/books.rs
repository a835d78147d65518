use serde::{Deserialize, Serialize};

use crate::book::{Book, BookRef};

#[derive(Debug, Deserialize, Serialize)]
pub struct ListBooksResponse {
    pub books: Vec<BookRef>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BookDetailsResponse {
    pub book: Book,
}
