//! bulkrun - sequential bulk operation runner

#![allow(missing_docs)]

use bulkrun::cli::{self, Cli};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    match cli::run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        // Finished, but some items still failed or the run was interrupted
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
