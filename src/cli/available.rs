//! Available command: legal colors at a band position of unknown total length.

use crate::availability::available_at;
use crate::cli::common::{CliError, CliResult};
use crate::models::Color;
use clap::Args;
use serde::Serialize;

/// Show which colors are legal at a band position
#[derive(Debug, Clone, Args)]
pub struct AvailableArgs {
    /// Zero-based band position index
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct AvailableResult {
    index: usize,
    colors: Vec<Color>,
}

impl AvailableArgs {
    /// Execute the available command.
    ///
    /// An empty result means no supported layout has a band at this
    /// position; that is reported, not treated as a failure.
    pub fn execute(&self) -> CliResult<()> {
        let colors = available_at(self.index);

        if self.json {
            let result = AvailableResult {
                index: self.index,
                colors: colors.to_vec(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if colors.is_empty() {
            println!(
                "No supported resistor layout has a band at position {}",
                self.index
            );
        } else {
            let names: Vec<&str> = colors.iter().map(|c| c.name()).collect();
            println!("Position {}: {}", self.index, names.join(" "));
        }

        Ok(())
    }
}
