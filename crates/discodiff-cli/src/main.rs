//! discodiff CLI
//!
//! Command-line interface for comparing discovery documents

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "discodiff")]
#[command(about = "discodiff - Structural diff for API discovery documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two discovery documents
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
    };

    match result {
        Ok(commands::Outcome::Success) => {}
        Ok(commands::Outcome::ChangesFound) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
