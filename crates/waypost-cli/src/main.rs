//! Waypost CLI
//!
//! Command-line interface for the Waypost back office: configuration,
//! session lifecycle, entity operations, and report export.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config_handlers;
mod token_store;

use anyhow::Result;
use clap::Parser;

use crate::cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if let Err(err) = commands::dispatch(args).await {
        // The global sign-out policy surfaces exactly once, here: any
        // command that hit a 401 (or ran without a token) clears the
        // stored token and points the user at sign-in.
        if let Some(client_err) = err.downcast_ref::<waypost_client::Error>() {
            if client_err.requires_sign_in() {
                token_store::clear()?;
                eprintln!("{client_err}");
                eprintln!("You have been signed out. Run `waypost sign-in --token <token>`.");
                std::process::exit(2);
            }
        }
        return Err(err);
    }
    Ok(())
}
