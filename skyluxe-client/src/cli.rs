//! Skyluxe client command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::session::SearchSession;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Origin IATA code
    #[arg(short, long)]
    pub origin: Option<String>,
    /// Destination IATA code
    #[arg(short, long)]
    pub destination: Option<String>,
    /// Departure date, `YYYY-MM-DD`
    #[arg(long)]
    pub date: Option<String>,
    /// Shows the price breakdown of the nth offer, counting from 1
    #[arg(short, long)]
    pub select: Option<usize>,
}

impl Args {
    /// Fills the search form with whatever was passed on the command line.
    pub fn apply(&self, session: &mut SearchSession) {
        if let Some(origin) = self.origin.as_ref() {
            session.set_origin(origin);
        }

        if let Some(destination) = self.destination.as_ref() {
            session.set_destination(destination);
        }

        if let Some(date) = self.date.as_ref() {
            session.set_date(date);
        }
    }
}
