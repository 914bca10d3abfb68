//! Skyluxe server command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use anyhow::Error;

use skyluxe_model::search::SearchQuery;

use crate::app::AppState;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Subcommands.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Operational commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Search(Search),
}

/// Runs a single search against the provider and prints the offers as JSON.
///
/// Handy for checking a token without starting the server.
#[derive(clap::Args, Debug)]
pub struct Search {
    /// Origin IATA code.
    pub origin: String,
    /// Destination IATA code.
    pub destination: String,
    /// Departure date, `YYYY-MM-DD`.
    pub date: String,
}

/// Runs a command.
pub async fn run_command(command: &Command, state: &AppState) -> Result<(), Error> {
    match command {
        Command::Search(command) => search(command, state).await,
    }
}

async fn search(command: &Search, state: &AppState) -> Result<(), Error> {
    let query = SearchQuery::new(&command.origin, &command.destination, &command.date);

    let offers = state.duffel.search(&query).await?;

    tracing::info!("found {} flights", offers.len());

    println!("{}", serde_json::to_string_pretty(&offers)?);

    Ok(())
}
