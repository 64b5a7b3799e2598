//! The exact minimization pipeline
//!
//! [`minimize`] chains the stages: prime-implicant generation, chart
//! construction and minimal cover selection. Callers that need the partial
//! results of a failed solve can drive [`ImplicantGenerator`],
//! [`CoverageChart`] and [`MinimalCoverSolver`] themselves.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::chart::CoverageChart;
use crate::error::{CoverageError, MinimizationError};
use crate::generator::{ImplicantGenerator, RoundTrace};
use crate::implicant::{Implicant, Minterm};
use crate::petrick::{MinimalCover, MinimalCoverSolver, Solution, SolveTrace};
use crate::MinimizerConfig;

/// Everything produced by one run of [`minimize`]
#[derive(Debug, Clone)]
pub struct Minimization {
    num_vars: usize,
    rounds: Vec<RoundTrace>,
    chart: CoverageChart,
    solution: Solution,
    elapsed: Duration,
}

impl Minimization {
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Prime-implicant generation rounds
    pub fn rounds(&self) -> &[RoundTrace] {
        &self.rounds
    }

    /// All prime implicants, in chart row order
    pub fn prime_implicants(&self) -> &[Implicant] {
        self.chart.prime_implicants()
    }

    pub fn chart(&self) -> &CoverageChart {
        &self.chart
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// The minimal cover
    pub fn cover(&self) -> &MinimalCover {
        &self.solution.cover
    }

    pub fn trace(&self) -> &SolveTrace {
        &self.solution.trace
    }

    /// Wall-clock time spent in the pipeline
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn into_cover(self) -> MinimalCover {
        self.solution.cover
    }
}

/// Compute a minimum sum-of-products cover of a single-output function
///
/// `minterms` is the on-set and `dont_cares` the don't-care set, both as
/// minterm indices below `2^num_vars`. A minterm in both lists is a
/// don't-care.
///
/// # Examples
///
/// ```
/// use qm_logic::{exact, MinimizerConfig};
///
/// # fn main() -> Result<(), qm_logic::MinimizationError> {
/// let result = exact::minimize(4, &[1, 3, 7, 11, 15], &[5, 9], &MinimizerConfig::default())?;
///
/// assert_eq!(result.cover().len(), 2);
/// assert_eq!(result.cover().literal_count(), 4);
/// # Ok(())
/// # }
/// ```
pub fn minimize(
    num_vars: usize,
    minterms: &[Minterm],
    dont_cares: &[Minterm],
    config: &MinimizerConfig,
) -> Result<Minimization, MinimizationError> {
    let start = Instant::now();

    let primes = ImplicantGenerator::new(num_vars)?
        .with_trace(config.trace)
        .find_prime_implicants(minterms, dont_cares)?;
    let (primes, rounds) = primes.into_parts();

    let chart = CoverageChart::build(primes, minterms, dont_cares);
    let solution = MinimalCoverSolver::with_config(config).solve(&chart)?;

    if config.verify {
        verify_cover(&chart, &solution.cover)?;
    }

    let elapsed = start.elapsed();
    info!(
        "Minimized {} variable(s): {} prime implicant(s), {} selected, {} literal(s) in {:?}",
        num_vars,
        chart.num_rows(),
        solution.cover.len(),
        solution.cover.literal_count(),
        elapsed
    );

    Ok(Minimization {
        num_vars,
        rounds,
        chart,
        solution,
        elapsed,
    })
}

/// Check that every on-set minterm of the chart is covered
pub fn verify_cover(chart: &CoverageChart, cover: &MinimalCover) -> Result<(), CoverageError> {
    match chart
        .on_set_minterms()
        .iter()
        .find(|&&m| !cover.covers(m))
    {
        Some(&minterm) => Err(CoverageError::UncoveredMinterm { minterm }),
        None => {
            debug!("Cover verified against {} minterm(s)", chart.num_columns());
            Ok(())
        }
    }
}
