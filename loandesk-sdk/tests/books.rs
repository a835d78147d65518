mod common;

use common::setup;
use loandesk_sdk::{Client, Error};

#[tokio::test]
async fn list_and_details() {
    let sdk = setup().await;

    let resp = sdk.books.list().await.unwrap();
    let names: Vec<_> = resp.books.into_iter().map(|book| book.name).collect();
    assert_eq!(names, vec!["Dune", "Emma"]);

    let resp = sdk.books.details("Dune").await.unwrap();
    assert_eq!(resp.book.author, "Frank Herbert");
    assert_eq!(resp.book.year_published, 1965);
    assert_eq!(resp.book.book_type, "fiction");
}

#[tokio::test]
async fn details_of_unknown_book_is_an_api_error() {
    let sdk = setup().await;

    let err = sdk.books.details("Nope").await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Book not found");
        }
        Error::Transport(err) => panic!("expected api error, got transport: {err}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let sdk = Client::new("http://127.0.0.1:1");

    let err = sdk.books.list().await.unwrap_err();
    assert!(err.is_transport());
}
