//! Loandesk command-line interface

mod books;
mod customers;
mod loans;

use books::Books;
use clap::{Parser, Subcommand};
use customers::Customers;
use loandesk_sdk::Client;
use loans::Loans;
use serde::Serialize;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, env = "LOANDESK_ADDR", default_value = "http://127.0.0.1:5000")]
    loandesk_addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "browse and restock books")]
    Books(Books),
    #[command(about = "browse customers")]
    Customers(Customers),
    #[command(about = "manage loans")]
    Loan(Loans),
}

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::Registry::default()
        .with(ErrorLayer::default())
        .with(env_filter)
        .with(tracing_subscriber::fmt::Layer::default());

    // set the subscriber as the default for the application
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to setup tracing subscriber");

    let cli = Cli::parse();

    let sdk = Client::new(cli.loandesk_addr.clone());

    match cli.command {
        Commands::Books(books) => books.handle(&sdk).await,
        Commands::Customers(customers) => customers.handle(&sdk).await,
        Commands::Loan(loan) => loan.handle(&sdk).await,
    }
}

pub(crate) fn handle_resp<T: Serialize>(resp: Result<T, loandesk_sdk::Error>) {
    match resp {
        Ok(resp) => {
            let resp = serde_json::to_string_pretty(&resp).unwrap();
            println!("{resp}");
        }
        Err(e) => {
            println!("Error: {e}");
        }
    }
}
