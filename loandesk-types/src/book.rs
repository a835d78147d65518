use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
}

/// Name-only entry returned by the book list endpoint. The name is the
/// unique key used by the detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookRef {
    pub name: String,
}

/// The four book attributes copied onto a loan at creation time. Sent
/// as the delete-loan body and as the restock (create-book) body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSnapshot {
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
}
