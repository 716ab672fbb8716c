use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::TextJustify;
use crate::formatting::ColorMode;
use crate::symbols::SymbolPreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Justify {
    Left,
    Right,
    Center,
}

impl From<Justify> for TextJustify {
    fn from(j: Justify) -> Self {
        match j {
            Justify::Left => TextJustify::Left,
            Justify::Right => TextJustify::Right,
            Justify::Center => TextJustify::Center,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "numstr")]
#[command(
    about = "Format number strings with locale sign, currency and filler symbols",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a plain decimal number string
    Format {
        /// Number to format, e.g. -1234.56
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Symbol preset (see `numstr presets`)
        #[arg(short, long, value_parser = parse_preset)]
        preset: Option<SymbolPreset>,

        /// Currency symbol, e.g. "$" or "€"
        #[arg(long)]
        currency: Option<String>,

        /// Place currency and minus sign after the digits
        #[arg(long, conflicts_with = "preset")]
        trailing: bool,

        /// Width of the number field
        #[arg(long = "field-length")]
        field_length: Option<usize>,

        /// Justification within the number field
        #[arg(long, value_enum)]
        justify: Option<Justify>,

        /// Configuration file (defaults to searching for .numstr.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// When to color negative values
        #[arg(long, value_enum, default_value = "auto", env = "NUMSTR_COLOR")]
        color: ColorMode,
    },

    /// Print a filler field
    Filler {
        /// Characters to repeat
        #[arg(long)]
        chars: Option<String>,

        /// Number of repetitions
        #[arg(long)]
        count: Option<usize>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List available symbol presets
    Presets {
        /// Sample value shown for each preset
        #[arg(long, default_value = "-1234.56", allow_hyphen_values = true)]
        sample: String,
    },

    /// Show the resolved configuration
    ShowConfig {
        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_preset(s: &str) -> Result<SymbolPreset, String> {
    s.parse::<SymbolPreset>().map_err(|e| {
        let names: Vec<&str> = SymbolPreset::all().iter().map(|p| p.as_str()).collect();
        format!("{}. Valid options: {}", e, names.join(", "))
    })
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
