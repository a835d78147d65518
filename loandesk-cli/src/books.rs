use clap::{Args, Subcommand};
use loandesk_sdk::{books::BookSnapshot, Client};

use crate::handle_resp;

#[derive(Args, Debug)]
pub struct Books {
    #[clap(subcommand)]
    subcommand: BooksSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BooksSubcommand {
    #[command(about = "list book names")]
    List,
    #[command(about = "show details for one book")]
    Details {
        #[arg(help = "name of the book")]
        name: String,
    },
    #[command(about = "add a book to the inventory")]
    Create {
        #[arg(help = "name of the book")]
        name: String,
        #[arg(short, long)]
        author: String,
        #[arg(short, long)]
        year_published: i32,
        #[arg(short, long)]
        book_type: String,
    },
}

impl Books {
    pub async fn handle(self, sdk: &Client) {
        match self.subcommand {
            BooksSubcommand::List => {
                let resp = sdk.books.list().await;
                handle_resp(resp);
            }
            BooksSubcommand::Details { name } => {
                let resp = sdk.books.details(&name).await;
                handle_resp(resp);
            }
            BooksSubcommand::Create {
                name,
                author,
                year_published,
                book_type,
            } => {
                let resp = sdk
                    .books
                    .create(&BookSnapshot {
                        name,
                        author,
                        year_published,
                        book_type,
                    })
                    .await;
                handle_resp(resp);
            }
        }
    }
}
