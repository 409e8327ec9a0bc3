//! Colors command: registry introspection for the twelve band colors.

use crate::cli::common::{CliError, CliResult};
use crate::models::{BandRole, Color};
use crate::registry::{attributes_of, colors_with_role, swatch_of};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// List the color registry and the roles each color can play
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Only list colors that can play this role
    #[arg(long, value_enum, value_name = "ROLE")]
    pub role: Option<RoleFilter>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Role filter accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleFilter {
    /// Colors with a significant digit value
    Digit,
    /// Colors with a multiplier value (all of them)
    Multiplier,
    /// Colors with a tolerance value
    Tolerance,
}

impl From<RoleFilter> for BandRole {
    fn from(filter: RoleFilter) -> Self {
        match filter {
            RoleFilter::Digit => Self::Digit,
            RoleFilter::Multiplier => Self::Multiplier,
            RoleFilter::Tolerance => Self::Tolerance,
        }
    }
}

#[derive(Debug, Serialize)]
struct ColorRow {
    name: &'static str,
    digit: Option<u8>,
    multiplier: f64,
    tolerance: Option<f64>,
    swatch: String,
    dark_swatch: bool,
}

impl ColorRow {
    fn new(color: Color) -> Self {
        let attributes = attributes_of(color);
        let swatch = swatch_of(color);
        Self {
            name: color.name(),
            digit: attributes.digit,
            multiplier: attributes.multiplier,
            tolerance: attributes.tolerance,
            swatch: swatch.to_hex(),
            dark_swatch: swatch.is_dark(),
        }
    }
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let colors: &[Color] = match self.role {
            Some(filter) => colors_with_role(filter.into()),
            None => &Color::ALL,
        };
        let rows: Vec<ColorRow> = colors.iter().map(|c| ColorRow::new(*c)).collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!(
                "{:<8} {:>5} {:>12} {:>10} {:>8}",
                "color", "digit", "multiplier", "tolerance", "swatch"
            );
            for row in rows {
                println!(
                    "{:<8} {:>5} {:>12} {:>10} {:>8}",
                    row.name,
                    row.digit.map_or_else(|| "-".to_string(), |d| d.to_string()),
                    format_multiplier(row.multiplier),
                    row.tolerance
                        .map_or_else(|| "-".to_string(), |t| format!("{t}%")),
                    row.swatch
                );
            }
        }

        Ok(())
    }
}

/// Compact multiplier label matching how resistor charts print it.
fn format_multiplier(multiplier: f64) -> String {
    if multiplier >= 1e9 {
        format!("x{}G", multiplier / 1e9)
    } else if multiplier >= 1e6 {
        format!("x{}M", multiplier / 1e6)
    } else if multiplier >= 1e3 {
        format!("x{}k", multiplier / 1e3)
    } else {
        format!("x{multiplier}")
    }
}
