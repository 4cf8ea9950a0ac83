//! Monte Carlo estimation of the percolation threshold.

use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{InvalidArgument, Result},
    percolation::Percolation,
};

/// Value of the standard normal quantile used for 95% confidence intervals.
const CONFIDENCE_95: f64 = 1.96;

#[derive(Debug, Clone)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

/// Opens sites of an n-by-n grid in random order until it percolates.
/// Returns the fraction of sites that were open at that moment.
pub fn run_trial(n: usize, rng: &mut impl Rng) -> Result<f64> {
    let mut p: Percolation = Percolation::new(n)?;
    let mut sites: Vec<(usize, usize)> = (1..=n)
        .flat_map(|row| (1..=n).map(move |col| (row, col)))
        .collect();
    sites.shuffle(rng);
    for (row, col) in sites {
        p.open(row, col)?;
        if p.percolates() {
            break;
        }
    }
    Ok(p.number_of_open_sites() as f64 / (n * n) as f64)
}

impl PercolationStats {
    /// Runs `trials` independent experiments on n-by-n grids.
    pub fn new(n: usize, trials: usize, rng: &mut impl Rng) -> Result<Self> {
        if n == 0 {
            return Err(InvalidArgument::EmptyGrid);
        }
        if trials == 0 {
            return Err(InvalidArgument::NoTrials);
        }
        let thresholds = (0..trials)
            .map(|t| {
                let threshold = run_trial(n, rng)?;
                log::debug!("trial {t}: threshold {threshold:.4}");
                Ok(threshold)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation. NaN with a single trial.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let sq: f64 = self.thresholds.iter().map(|x| (x - mean) * (x - mean)).sum();
        (sq / (self.thresholds.len() as f64 - 1.0)).sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }
}
