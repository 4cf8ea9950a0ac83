use std::io::Read;

use anyhow::{ensure, Context};
use clap::Parser;
use percolation::{logging::logger, randomized_queue::RandomizedQueue};

/// Read whitespace separated strings from stdin and print k of them, uniformly at random.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How many strings to print
    k: usize,
}

fn main() -> anyhow::Result<()> {
    let _logger = logger()?.start()?;
    let args = Args::parse();
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    let queue: RandomizedQueue<&str> = input.split_whitespace().collect();
    log::debug!("Read {} strings", queue.len());
    ensure!(
        args.k <= queue.len(),
        "asked for {} strings but only {} were given",
        args.k,
        queue.len()
    );
    for s in queue.iter().take(args.k) {
        println!("{s}");
    }
    Ok(())
}
