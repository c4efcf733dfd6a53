//! Binary crate for the Skycast terminal frontend.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Driving the lookup controller
//! - Printing the composed weather report

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
