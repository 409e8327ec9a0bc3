//! Decode command: complete band sequence to resistance value.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::decoder;
use crate::models::{Color, Resistance};
use clap::Args;
use serde::Serialize;

/// Decode a complete band color sequence
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Band colors in physical order (e.g. "brown black red gold")
    #[arg(value_name = "COLOR", required = true, num_args = 1..)]
    pub colors: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DecodeResult {
    bands: Vec<Color>,
    digits: Vec<u8>,
    multiplier: f64,
    tolerance: f64,
    ohms: f64,
    display: String,
}

impl DecodeResult {
    fn new(bands: Vec<Color>, resistance: &Resistance) -> Self {
        Self {
            bands,
            digits: resistance.digits.clone(),
            multiplier: resistance.multiplier,
            tolerance: resistance.tolerance,
            ohms: resistance.ohms(),
            display: resistance.format(true),
        }
    }
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let bands = parse_colors(&self.colors)?;

        let resistance =
            decoder::decode(&bands).map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            let result = DecodeResult::new(bands, &resistance);
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            let config = Config::load().unwrap_or_default();
            let names: Vec<&str> = bands.iter().map(|c| c.name()).collect();
            println!("Bands: {}", names.join(" "));
            println!("Value: {}", resistance.format(config.output.unicode));
        }

        Ok(())
    }
}

/// Parses color names, rejecting the first unknown one.
fn parse_colors(names: &[String]) -> CliResult<Vec<Color>> {
    names
        .iter()
        .map(|name| {
            name.parse::<Color>().map_err(|e| {
                CliError::usage(format!(
                    "{e}. Colors are: black, brown, red, orange, yellow, green, blue, violet, grey, white, gold, silver"
                ))
            })
        })
        .collect()
}
