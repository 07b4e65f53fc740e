//! optionals-console
//!
//! Reads a number and an IPv4 address, either from the command line or
//! interactively, and reports what `optionals` made of them.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for both inputs
//! cargo run --bin optionals-console
//!
//! # Pass inputs directly, with debug events from the library
//! RUST_LOG=optionals=debug cargo run --bin optionals-console -- \
//!     --number 42 --address 192.168.0.1
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use optionals_console::{describe_address, describe_number, parse_ipv4, parse_number};

/// Parses a number and an IPv4 address.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Arguments {
    /// The number to parse; prompted for when omitted.
    #[arg(long)]
    number: Option<String>,

    /// The IPv4 address to parse; prompted for when omitted.
    #[arg(long)]
    address: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "optionals_console=info,optionals=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let arguments = Arguments::parse();

    let number_input = read_input(arguments.number, "Please enter a valid 32 bit number: ")?;
    let number = parse_number(&number_input);
    tracing::info!(state = %number.state(), "parsed number input");
    println!("{}", describe_number(&number));
    println!();

    let address_input = read_input(arguments.address, "Please enter a valid IPv4 address: ")?;
    let address = parse_ipv4(&address_input).map_err(|error| anyhow!(error))?;
    tracing::info!(state = %address.state(), "parsed address input");
    println!("{}", describe_address(&address));

    Ok(())
}

fn read_input(provided: Option<String>, prompt: &str) -> anyhow::Result<String> {
    if let Some(input) = provided {
        return Ok(input);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line)
}
