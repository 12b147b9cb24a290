//! till - supermarket checkout front-end.
//!
//! Scans the product codes given on the command line against the built-in
//! demo catalog and prints the basket total:
//!
//! ```text
//! $ till VOUCHER TSHIRT MUG
//! Total Price: 32.50€
//! ```
//!
//! An unknown code prints a one-line diagnostic and exits non-zero without
//! printing a total.

mod catalog;
mod output;

use anyhow::Result;
use clap::Parser;
use till_checkout::prelude::*;

/// till - total a basket of scanned product codes
#[derive(Parser)]
#[command(name = "till")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Product codes to scan, in order
    codes: Vec<String>,

    /// Print a per-product receipt breakdown before the total
    #[arg(short, long)]
    receipt: bool,

    /// Emit the receipt as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the bare total amount only, without label or receipt
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = output::Output::new(cli.json, cli.quiet);

    if let Err(e) = run(&cli, output) {
        output.error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, output: output::Output) -> Result<()> {
    let catalog = catalog::demo_catalog()?;
    let mut checkout = Checkout::new(&catalog);

    for code in &cli.codes {
        checkout.scan(code)?;
    }

    let pricing = checkout.pricing();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&pricing)?);
        return Ok(());
    }

    if cli.receipt {
        output.receipt(&pricing);
    }
    output.total(&pricing);
    Ok(())
}
