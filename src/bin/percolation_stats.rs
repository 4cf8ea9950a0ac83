use clap::Parser;
use percolation::{logging::logger, stats::PercolationStats};
use rand::{rngs::StdRng, SeedableRng};

/// Estimate the percolation threshold of an n-by-n grid by Monte Carlo simulation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension
    n: usize,

    /// Number of independent trials
    trials: usize,

    /// Seed for the random generator, random if not given
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let _logger = logger()?.start()?;
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!("Running {} trials on a {n}x{n} grid", args.trials, n = args.n);
    let stats = PercolationStats::new(args.n, args.trials, &mut rng)?;
    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );
    Ok(())
}
