//! Count fresh items in an inventory.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --bin freshness-inventory -- inventory.txt
//! ```
//!
//! ```txt
//! Evaluation time: 41.2µs  - Part One: 3
//! Evaluation time: 1.1µs  - Part Two: 14
//! ```
//!
//! Pass `-` to read the inventory from stdin.

use clap::{value_parser, Arg, Command};
use inventory::{timed, Inventory};
use std::{
    io::{self, Read},
    process,
};
use tracing::{error, info, Level};

fn main() {
    // Parse arguments
    let matches = Command::new("freshness-inventory")
        .about("count fresh items in an inventory")
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(value_parser!(String))
                .help("Path to the inventory file (or - for stdin)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .required(false)
                .default_value("info")
                .value_parser(value_parser!(Level))
                .help("Maximum level of emitted logs"),
        )
        .get_matches();

    // Create logger
    let level = *matches
        .get_one::<Level>("log-level")
        .expect("log level has a default");
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    // Load inventory
    let path = matches
        .get_one::<String>("input")
        .expect("input is required");
    let content = if path == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).map(|_| content)
    } else {
        std::fs::read_to_string(path)
    };
    let content = match content {
        Ok(content) => content,
        Err(err) => {
            error!(path, ?err, "failed to read inventory");
            process::exit(1);
        }
    };
    let inventory = match Inventory::parse(&content) {
        Ok(inventory) => inventory,
        Err(err) => {
            error!(path, %err, "failed to parse inventory");
            process::exit(1);
        }
    };
    info!(
        path,
        markers = inventory.store().len(),
        queries = inventory.queries().len(),
        "loaded inventory"
    );

    // Answer queries
    let (available, elapsed) = timed("available", || inventory.fresh_available());
    println!("Evaluation time: {elapsed:?}  - Part One: {available}");
    let (total, elapsed) = timed("total", || inventory.fresh_total());
    println!("Evaluation time: {elapsed:?}  - Part Two: {total}");
}
