//! Command-line entry point for the `hgrid` tool.
//!
//! Draws the Hilbert curve's walk through a power-of-two grid as ASCII art
//! on standard output.

use std::process;

use anyhow::Result;
use clap::Parser;
use hilbertgrid::HilbertCurve;

/// ASCII rendering of the curve walk.
mod ascii;

#[derive(Parser)]
#[command(name = "hgrid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Draw the Hilbert curve walk of a 2^K x 2^K grid as ASCII art")]
/// Top-level CLI options.
struct Cli {
    /// Grid exponent: the rendered grid has side `2^K`.
    #[arg(
        value_name = "K",
        value_parser = clap::value_parser!(u32).range(0..=15),
        help = "Grid exponent; the grid has side 2^K"
    )]
    order: u32,
}

/// Render the requested grid to stdout.
fn run(order: u32) -> Result<()> {
    let curve = HilbertCurve::from_order(order)?;
    print!("{}", ascii::render(&curve));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.order) {
        eprintln!("{e}");
        process::exit(1);
    }
}
