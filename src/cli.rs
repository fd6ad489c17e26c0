//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Control dojo - Result combinators on beards and rollercoasters
#[derive(Parser, Debug)]
#[command(name = "dojo")]
#[command(version)]
#[command(about = "Run the control dojo exercises from the command line")]
#[command(
    long_about = "Looks up royal beard colours through missing kings and beards, and runs riders through the Mondo Looper admission rules and photo booth."
)]
pub struct Cli {
    /// Ride configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the beard colour of a country's king
    Beard {
        /// Country name
        #[arg(long)]
        country: String,

        /// King's name (omit for a country without a king)
        #[arg(long)]
        king: Option<String>,

        /// Beard colour (omit for a clean-shaven king)
        #[arg(long, requires = "king")]
        beard: Option<String>,

        /// Say which level is missing instead of "n/a"
        #[arg(short, long, default_value_t = false)]
        explain: bool,
    },

    /// Check whether someone may ride the Mondo Looper
    Ride {
        /// Rider's name
        #[arg(short, long)]
        name: String,

        /// Rider's height in centimetres
        #[arg(long)]
        height: u32,

        /// Address the rider by name in rejection messages
        #[arg(long, default_value_t = false)]
        named: bool,
    },

    /// Run a group of riders through the ride and photo booth
    Photos {
        /// Which group queues up
        #[arg(value_enum)]
        group: Group,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    Dwarfs,
    Monsters,
}
