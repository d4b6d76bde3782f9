//! Campus job board terminal client.

use clap::Parser;
use tracing::error;

use cjb_cli::{exit_codes, logging, Cli};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match cjb_cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            exit_codes::INTERNAL_ERROR
        }
    };

    std::process::exit(code);
}
