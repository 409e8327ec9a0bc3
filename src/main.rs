//! Resistor Band Calculator - command-line resistor color code tool.
//!
//! Decodes complete band sequences, reads unfinished sequences in both
//! physical directions, and exposes the color registry for scripts.

use bandcode::cli::{AvailableArgs, ColorsArgs, DecodeArgs, ResolveArgs};
use bandcode::constants::APP_BINARY_NAME;
use clap::{Parser, Subcommand};
use env_logger::Env;

/// Resistor color band calculator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode a complete band sequence into a resistance value
    Decode(DecodeArgs),
    /// Read a partial band sequence in both physical directions
    Resolve(ResolveArgs),
    /// List the color registry with digit/multiplier/tolerance attributes
    Colors(ColorsArgs),
    /// Show which colors are legal at a band position
    Available(AvailableArgs),
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Decode(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Colors(args) => args.execute(),
        Commands::Available(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
