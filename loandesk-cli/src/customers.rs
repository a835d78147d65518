use clap::{Args, Subcommand};
use loandesk_sdk::Client;

use crate::handle_resp;

#[derive(Args, Debug)]
pub struct Customers {
    #[clap(subcommand)]
    subcommand: CustomersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CustomersSubcommand {
    #[command(about = "list customer names")]
    List,
    #[command(about = "show details for one customer")]
    Details {
        #[arg(help = "name of the customer")]
        name: String,
    },
}

impl Customers {
    pub async fn handle(self, sdk: &Client) {
        match self.subcommand {
            CustomersSubcommand::List => {
                let resp = sdk.customers.list().await;
                handle_resp(resp);
            }
            CustomersSubcommand::Details { name } => {
                let resp = sdk.customers.details(&name).await;
                handle_resp(resp);
            }
        }
    }
}
