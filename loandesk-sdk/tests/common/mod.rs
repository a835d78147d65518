use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use loandesk_sdk::Client;
use loandesk_types::book::{Book, BookSnapshot};
use loandesk_types::customer::Customer;
use loandesk_types::loan::Loan;
use loandesk_types::methods::loans::CreateLoanParams;
use serde_json::json;
use tokio::sync::oneshot;

/// In-memory stand-in for the loan server. Mirrors the real one's
/// behavior: creating a loan removes the book from the inventory and
/// snapshots its attributes onto the loan; deleting a loan answers
/// with a redirect page rather than JSON.
struct State {
    books: Vec<Book>,
    customers: Vec<Customer>,
    loans: HashMap<i64, Loan>,
    next_loan_id: i64,
}

fn seed() -> State {
    State {
        books: vec![
            Book {
                id: 1,
                name: "Dune".into(),
                author: "Frank Herbert".into(),
                year_published: 1965,
                book_type: "fiction".into(),
            },
            Book {
                id: 2,
                name: "Emma".into(),
                author: "Jane Austen".into(),
                year_published: 1815,
                book_type: "romance".into(),
            },
        ],
        customers: vec![
            Customer {
                id: 1,
                name: "Jane".into(),
                city: "Lisbon".into(),
                age: 34,
            },
            Customer {
                id: 2,
                name: "Omar".into(),
                city: "Porto".into(),
                age: 51,
            },
        ],
        loans: HashMap::new(),
        next_loan_id: 1,
    }
}

pub async fn setup() -> Client {
    let state = Arc::new(Mutex::new(seed()));
    let (port_tx, port_rx) = oneshot::channel();

    tokio::spawn(async move {
        let make_svc = make_service_fn(move |_| {
            let state = Arc::clone(&state);
            async move {
                Ok::<_, Infallible>(service_fn(move |req| handle(Arc::clone(&state), req)))
            }
        });
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let server = Server::bind(&addr).serve(make_svc);
        port_tx.send(server.local_addr().port()).unwrap();
        if let Err(err) = server.await {
            panic!("stub server error: {err}");
        }
    });

    let port = port_rx.await.unwrap();
    Client::new(format!("http://127.0.0.1:{port}"))
}

async fn handle(
    state: Arc<Mutex<State>>,
    req: Request<Body>,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let body = hyper::body::to_bytes(req.into_body()).await.unwrap();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let mut state = state.lock().unwrap();

    let resp = match segments.as_slice() {
        ["loans", "books", "json"] if method == Method::GET => {
            let books: Vec<_> = state
                .books
                .iter()
                .map(|book| json!({ "name": book.name }))
                .collect();
            ok(json!({ "books": books }))
        }
        ["loans", "customers", "json"] if method == Method::GET => {
            let customers: Vec<_> = state
                .customers
                .iter()
                .map(|customer| json!({ "name": customer.name }))
                .collect();
            ok(json!({ "customers": customers }))
        }
        ["loans", "customers", "details", name] if method == Method::GET => {
            match state.customers.iter().find(|c| c.name == *name) {
                Some(customer) => ok(json!({ "customer": customer })),
                None => err(StatusCode::NOT_FOUND, "Customer not found"),
            }
        }
        ["loans", "books", "details", name] if method == Method::GET => {
            match state.books.iter().find(|b| b.name == *name) {
                Some(book) => ok(json!({ "book": book })),
                None => err(StatusCode::NOT_FOUND, "Book not found"),
            }
        }
        ["loans", "json"] if method == Method::GET => {
            let loans: Vec<_> = state
                .loans
                .values()
                .map(|loan| {
                    json!({
                        "customer_name": loan.customer_name,
                        "book_name": loan.book_name,
                        "loan_date": loan.loan_date,
                        "return_date": loan.return_date,
                    })
                })
                .collect();
            ok(json!({ "loans": loans }))
        }
        ["loans", id, "details"] if method == Method::GET => {
            let id: i64 = id.parse().unwrap();
            match state.loans.get(&id) {
                Some(loan) => ok(json!({ "loan": loan })),
                None => err(StatusCode::NOT_FOUND, "Loan not found"),
            }
        }
        ["loans", "create"] if method == Method::POST => {
            let params: CreateLoanParams = serde_json::from_slice(&body).unwrap();
            match state
                .books
                .iter()
                .position(|book| book.name == params.book_name)
            {
                Some(pos) if state
                    .customers
                    .iter()
                    .any(|c| c.name == params.customer_name) =>
                {
                    let book = state.books.remove(pos);
                    let id = state.next_loan_id;
                    state.next_loan_id += 1;
                    let loan = Loan {
                        id,
                        customer_name: params.customer_name,
                        book_name: book.name,
                        loan_date: params.loan_date.to_rfc3339(),
                        return_date: params.return_date.to_rfc3339(),
                        original_author: book.author,
                        original_year_published: book.year_published,
                        original_book_type: book.book_type,
                    };
                    state.loans.insert(id, loan);
                    ok(json!({ "message": "Loan added successfully" }))
                }
                Some(_) => err(StatusCode::BAD_REQUEST, "Customer not found."),
                None => err(StatusCode::BAD_REQUEST, "Book not available for loan."),
            }
        }
        ["loans", id, "delete"] if method == Method::POST => {
            let id: i64 = id.parse().unwrap();
            if state.loans.remove(&id).is_some() {
                Response::builder()
                    .status(StatusCode::OK)
                    .header("content-type", "text/html")
                    .body(Body::from("<html>redirecting to /loans/</html>"))
                    .unwrap()
            } else {
                err(StatusCode::NOT_FOUND, "Loan not found")
            }
        }
        ["books", "create"] if method == Method::POST => {
            let snapshot: BookSnapshot = serde_json::from_slice(&body).unwrap();
            let id = state.books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
            state.books.push(Book {
                id,
                name: snapshot.name,
                author: snapshot.author,
                year_published: snapshot.year_published,
                book_type: snapshot.book_type,
            });
            ok(json!({ "message": "Book added successfully" }))
        }
        _ => err(StatusCode::NOT_FOUND, "Not found"),
    };

    Ok(resp)
}

fn ok(body: serde_json::Value) -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn err(status: StatusCode, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(json!({ "error": message }).to_string()))
        .unwrap()
}
