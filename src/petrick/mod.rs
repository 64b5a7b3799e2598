//! Minimal cover selection: essential implicants plus Petrick's method
//!
//! [`MinimalCoverSolver::solve`] takes a [`CoverageChart`] and picks a subset of
//! its prime implicants covering every on-set minterm:
//!
//! 1. Essential implicants (sole coverers of some minterm) are always taken.
//! 2. If minterms remain, each contributes a clause listing its coverers. The
//!    product of all clauses is expanded into a sum of products, simplified by
//!    absorption, and the cheapest product is chosen: fewest implicants, then
//!    fewest literals, then smallest ascending index sequence.
//!
//! Expansion is exponential in the number of remaining minterms in the worst
//! case. [`MinimizerConfig::max_petrick_terms`](crate::MinimizerConfig) bounds it.

mod expression;
mod term;


pub use expression::PetrickExpression;
pub use term::PetrickTerm;

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::chart::{CoverageChart, EssentialImplicant};
use crate::error::{CoverageError, ExpansionError, MinimizationError};
use crate::implicant::{Implicant, Minterm};
use crate::MinimizerConfig;

/// Clause of Petrick's expression: the implicants covering one minterm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetrickClause {
    /// The minterm this clause stands for
    pub minterm: Minterm,
    /// Indices of the implicants covering it, ascending
    pub implicants: Vec<usize>,
}

/// Step-by-step record of a solve, for reporting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveTrace {
    /// Essential implicants and the minterms justifying them
    pub essentials: Vec<EssentialImplicant>,
    /// On-set minterms left uncovered by the essential implicants
    pub remaining: Vec<Minterm>,
    /// One clause per remaining minterm
    pub clauses: Vec<PetrickClause>,
    /// Number of terms after distributing each clause
    pub expansion_sizes: Vec<usize>,
    /// The fully expanded expression, before absorption
    pub expanded: Option<PetrickExpression>,
    /// The expression after absorption
    pub simplified: Option<PetrickExpression>,
    /// Terms of minimal size in the simplified expression
    pub candidates: Vec<PetrickTerm>,
    /// The chosen term
    pub selected: Option<PetrickTerm>,
}

impl SolveTrace {
    /// True when Petrick's method was needed
    pub fn used_petrick(&self) -> bool {
        !self.clauses.is_empty()
    }
}

/// A minimal set of prime implicants covering the on-set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinimalCover {
    implicants: Vec<Implicant>,
}

impl MinimalCover {
    /// The selected implicants, in ascending chart order
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    /// Number of product terms
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// Total number of literals over all product terms
    pub fn literal_count(&self) -> usize {
        self.implicants.iter().map(Implicant::literal_count).sum()
    }

    /// Does any selected implicant cover `minterm`?
    pub fn covers(&self, minterm: Minterm) -> bool {
        self.implicants.iter().any(|i| i.covers(minterm))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Implicant> {
        self.implicants.iter()
    }

    pub fn into_implicants(self) -> Vec<Implicant> {
        self.implicants
    }
}

impl<'a> IntoIterator for &'a MinimalCover {
    type Item = &'a Implicant;
    type IntoIter = std::slice::Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.iter()
    }
}

/// Result of [`MinimalCoverSolver::solve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Chart indices of the selected implicants, ascending
    pub selected: Vec<usize>,
    /// The selected implicants
    pub cover: MinimalCover,
    /// How the selection was made
    pub trace: SolveTrace,
}

/// Exact minimum-cover solver
///
/// # Examples
///
/// ```
/// use qm_logic::{CoverageChart, ImplicantGenerator, MinimalCoverSolver};
///
/// # fn main() -> Result<(), qm_logic::MinimizationError> {
/// let minterms = [0, 1, 2, 5, 6, 7];
/// let primes = ImplicantGenerator::new(3)?.find_prime_implicants(&minterms, &[])?;
/// let chart = CoverageChart::build(primes.as_slice().to_vec(), &minterms, &[]);
///
/// let solution = MinimalCoverSolver::new().solve(&chart)?;
/// assert_eq!(solution.cover.len(), 3);
/// assert!(minterms.iter().all(|&m| solution.cover.covers(m)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinimalCoverSolver {
    max_terms: Option<usize>,
}

impl MinimalCoverSolver {
    /// Create an unbounded solver
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver following `config`
    pub fn with_config(config: &MinimizerConfig) -> Self {
        MinimalCoverSolver {
            max_terms: config.max_petrick_terms,
        }
    }

    /// Bound the number of terms Petrick's expansion may hold
    pub fn with_max_terms(mut self, max_terms: Option<usize>) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Select a minimum cover of the chart's on-set
    ///
    /// An empty on-set yields an empty cover. A minterm covered by no
    /// implicant fails with [`CoverageError::UncoveredMinterm`].
    pub fn solve(&self, chart: &CoverageChart) -> Result<Solution, MinimizationError> {
        let mut trace = SolveTrace::default();

        if chart.num_columns() == 0 {
            debug!("Empty on-set, nothing to cover");
            return Ok(Solution {
                selected: Vec::new(),
                cover: MinimalCover::default(),
                trace,
            });
        }

        trace.essentials = chart.essential_implicants();
        let essential_indices: Vec<usize> = trace.essentials.iter().map(|e| e.index).collect();
        trace.remaining = chart.remaining_minterms(&essential_indices);
        debug!(
            "{} essential implicant(s), {} minterm(s) remaining",
            essential_indices.len(),
            trace.remaining.len()
        );

        let mut selected: BTreeSet<usize> = essential_indices.into_iter().collect();

        if !trace.remaining.is_empty() {
            trace.clauses = trace
                .remaining
                .iter()
                .map(|&minterm| {
                    let implicants = chart.implicants_covering(minterm);
                    if implicants.is_empty() {
                        Err(CoverageError::UncoveredMinterm { minterm })
                    } else {
                        Ok(PetrickClause {
                            minterm,
                            implicants,
                        })
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;

            let expanded = self.expand(&trace.clauses, &mut trace.expansion_sizes)?;
            let simplified = expanded.absorb();
            debug!(
                "Petrick: {} term(s) expanded, {} after absorption",
                expanded.len(),
                simplified.len()
            );

            let choice = simplified
                .select_minimal(|t| chart.literal_count(t.iter()))
                .map(|(_, t)| t.clone());
            trace.candidates = simplified.candidates().into_iter().cloned().collect();

            // A non-empty clause list always expands to at least one term
            if let Some(term) = &choice {
                trace!("Selected term {}", term);
                selected.extend(term.iter());
            }
            trace.selected = choice;
            trace.expanded = Some(expanded);
            trace.simplified = Some(simplified);
        }

        let selected: Vec<usize> = selected.into_iter().collect();
        let implicants = selected
            .iter()
            .map(|&i| chart.prime_implicants()[i].clone())
            .collect();

        Ok(Solution {
            selected,
            cover: MinimalCover { implicants },
            trace,
        })
    }

    fn expand(
        &self,
        clauses: &[PetrickClause],
        sizes: &mut Vec<usize>,
    ) -> Result<PetrickExpression, ExpansionError> {
        let mut expression = PetrickExpression::unit();
        for (clause_index, clause) in clauses.iter().enumerate() {
            expression = match self.max_terms {
                Some(limit) => expression
                    .multiply_bounded(&clause.implicants, limit)
                    .ok_or(ExpansionError::TermLimitExceeded {
                        limit,
                        clause: clause_index,
                    })?,
                None => expression.multiply(&clause.implicants),
            };
            trace!(
                "After clause {} (minterm {}): {} term(s)",
                clause_index,
                clause.minterm,
                expression.len()
            );
            sizes.push(expression.len());
        }
        Ok(expression)
    }
}
