//! # dojo - command-line runner for the control dojo exercises
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The default level is `warn`;
//! set `RUST_LOG=debug` to watch each rule being checked.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use control_dojo::cli::Cli;
use control_dojo::commands;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = commands::run(&cli)?;
    println!("{output}");

    Ok(())
}

/// Initialize tracing with the `RUST_LOG` filter, writing to stderr.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
