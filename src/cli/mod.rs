//! CLI module for the weather relay
//!
//! Provides subcommands:
//! - `serve`: run the relay HTTP server
//! - `lookup`: submit a city list to a running relay and print the result

pub mod lookup;
pub mod serve;

use clap::{Parser, Subcommand};

/// Weather Relay - aggregate current weather for a list of cities
#[derive(Parser)]
#[command(name = "weather-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the relay server
    Serve(serve::ServeArgs),

    /// Look up weather through a running relay
    Lookup(lookup::LookupArgs),
}
