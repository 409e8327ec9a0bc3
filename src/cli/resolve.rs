//! Resolve command: read an in-progress sequence in both directions.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::{Color, Resistance};
use crate::resolver;
use clap::Args;
use serde::Serialize;

/// Tokens that mark a band position as not yet chosen.
const UNSET_TOKENS: [&str; 3] = ["_", "-", "none"];

/// Read a partial band sequence in both physical directions
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Band entries in order; use "_", "-" or "none" for an unset band
    #[arg(value_name = "BAND", required = true, num_args = 1..)]
    pub bands: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DirectionResult {
    digits: Vec<u8>,
    multiplier: f64,
    tolerance: f64,
    ohms: f64,
    display: String,
}

impl DirectionResult {
    fn new(resistance: &Resistance) -> Self {
        Self {
            digits: resistance.digits.clone(),
            multiplier: resistance.multiplier,
            tolerance: resistance.tolerance,
            ohms: resistance.ohms(),
            display: resistance.format(true),
        }
    }
}

#[derive(Debug, Serialize)]
struct ResolveResult {
    normal: Option<DirectionResult>,
    reversed: Option<DirectionResult>,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// Always exits successfully: a sequence with no valid reading is the
    /// expected state of a resistor still being entered, not an error.
    pub fn execute(&self) -> CliResult<()> {
        let bands = parse_bands(&self.bands)?;
        let reading = resolver::resolve(&bands);

        if self.json {
            let result = ResolveResult {
                normal: reading.normal.as_ref().map(DirectionResult::new),
                reversed: reading.reversed.as_ref().map(DirectionResult::new),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            let config = Config::load().unwrap_or_default();
            print_direction("Normal:  ", reading.normal.as_ref(), config.output.unicode);
            print_direction("Reversed:", reading.reversed.as_ref(), config.output.unicode);
        }

        Ok(())
    }
}

fn print_direction(label: &str, resistance: Option<&Resistance>, unicode: bool) {
    match resistance {
        Some(r) => println!("{label} {}", r.format(unicode)),
        None => println!("{label} no valid reading"),
    }
}

/// Parses band entries, mapping unset tokens to `None`.
fn parse_bands(entries: &[String]) -> CliResult<Vec<Option<Color>>> {
    entries
        .iter()
        .map(|entry| {
            if UNSET_TOKENS.contains(&entry.to_lowercase().as_str()) {
                Ok(None)
            } else {
                entry
                    .parse::<Color>()
                    .map(Some)
                    .map_err(|e| CliError::usage(format!("{e}. Use '_' for an unset band")))
            }
        })
        .collect()
}
