//! NLQ Gateway - natural-language-to-SQL analytics service
//!
//! Binary entry point; everything interesting lives in the library.

#![allow(missing_docs)]

use nlq_gateway::server;
use std::process::ExitCode;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    match server::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, so multi-line messages keep their shape
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
