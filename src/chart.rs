//! Prime-implicant coverage chart
//!
//! Rows are prime implicants, columns are the on-set minterms that still need
//! to be covered (don't-cares removed). Each row stores the set of columns it
//! covers as a [`BitSet`].

use std::collections::BTreeSet;

use bit_set::BitSet;
use log::debug;

use crate::implicant::{Implicant, Minterm};

/// An implicant that is the only coverer of at least one on-set minterm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssentialImplicant {
    /// Row index of the implicant in the chart
    pub index: usize,
    /// On-set minterms covered by this implicant and no other, ascending
    pub sole_minterms: Vec<Minterm>,
}

/// Coverage relation between prime implicants and on-set minterms
///
/// Built once by [`CoverageChart::build`] and immutable afterwards.
///
/// # Examples
///
/// ```
/// use qm_logic::{CoverageChart, ImplicantGenerator};
///
/// let primes = ImplicantGenerator::new(2)
///     .unwrap()
///     .find_prime_implicants(&[1, 2], &[])
///     .unwrap();
/// let chart = CoverageChart::build(primes.as_slice().to_vec(), &[1, 2], &[]);
///
/// assert_eq!(chart.on_set_minterms(), &[1, 2]);
/// assert_eq!(chart.essential_implicants().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CoverageChart {
    primes: Vec<Implicant>,
    on_set: Vec<Minterm>,
    rows: Vec<BitSet>,
}

impl CoverageChart {
    /// Build the chart for `primes` against `minterms` minus `dont_cares`
    ///
    /// The on-set is sorted and deduplicated. A minterm listed in both inputs
    /// is treated as a don't-care.
    pub fn build(primes: Vec<Implicant>, minterms: &[Minterm], dont_cares: &[Minterm]) -> Self {
        let dont_cares: BTreeSet<Minterm> = dont_cares.iter().copied().collect();
        let on_set: Vec<Minterm> = minterms
            .iter()
            .copied()
            .filter(|m| !dont_cares.contains(m))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let rows = primes
            .iter()
            .map(|prime| {
                on_set
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| prime.covers(**m))
                    .map(|(column, _)| column)
                    .collect::<BitSet>()
            })
            .collect();

        debug!(
            "Coverage chart: {} prime implicant(s) x {} on-set minterm(s)",
            primes.len(),
            on_set.len()
        );

        CoverageChart {
            primes,
            on_set,
            rows,
        }
    }

    /// The prime implicants, in row order
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.primes
    }

    /// The on-set minterms, in column order (ascending)
    pub fn on_set_minterms(&self) -> &[Minterm] {
        &self.on_set
    }

    /// Number of rows (prime implicants)
    pub fn num_rows(&self) -> usize {
        self.primes.len()
    }

    /// Number of columns (on-set minterms)
    pub fn num_columns(&self) -> usize {
        self.on_set.len()
    }

    /// True when there are no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty() || self.on_set.is_empty()
    }

    /// Column index of an on-set minterm
    pub fn column_of(&self, minterm: Minterm) -> Option<usize> {
        self.on_set.binary_search(&minterm).ok()
    }

    /// Does implicant `index` cover `minterm`?
    ///
    /// Only on-set minterms are charted; don't-cares and unknown minterms
    /// return `false`.
    pub fn covers(&self, index: usize, minterm: Minterm) -> bool {
        self.column_of(minterm)
            .is_some_and(|column| self.covers_column(index, column))
    }

    /// Does implicant `index` cover column `column`?
    pub fn covers_column(&self, index: usize, column: usize) -> bool {
        self.rows.get(index).is_some_and(|row| row.contains(column))
    }

    /// Columns covered by implicant `index`
    pub fn row(&self, index: usize) -> Option<&BitSet> {
        self.rows.get(index)
    }

    /// Indices of the implicants covering `minterm`, ascending
    pub fn implicants_covering(&self, minterm: Minterm) -> Vec<usize> {
        match self.column_of(minterm) {
            Some(column) => (0..self.rows.len())
                .filter(|&i| self.rows[i].contains(column))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Find the essential prime implicants
    ///
    /// Each essential implicant appears once, in order of the first column
    /// for which it is the sole coverer.
    pub fn essential_implicants(&self) -> Vec<EssentialImplicant> {
        let mut essentials: Vec<EssentialImplicant> = Vec::new();

        for (column, &minterm) in self.on_set.iter().enumerate() {
            let mut coverers = self
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.contains(column))
                .map(|(i, _)| i);
            let (Some(only), None) = (coverers.next(), coverers.next()) else {
                continue;
            };
            match essentials.iter_mut().find(|e| e.index == only) {
                Some(existing) => existing.sole_minterms.push(minterm),
                None => essentials.push(EssentialImplicant {
                    index: only,
                    sole_minterms: vec![minterm],
                }),
            }
        }

        debug!("{} essential prime implicant(s)", essentials.len());
        essentials
    }

    /// On-set minterms not covered by any of the `selected` implicants, ascending
    pub fn remaining_minterms(&self, selected: &[usize]) -> Vec<Minterm> {
        let mut covered = BitSet::with_capacity(self.on_set.len());
        for row in selected.iter().filter_map(|&i| self.rows.get(i)) {
            covered.union_with(row);
        }
        self.on_set
            .iter()
            .enumerate()
            .filter(|(column, _)| !covered.contains(*column))
            .map(|(_, &m)| m)
            .collect()
    }

    /// Total literal count of the given implicants
    pub fn literal_count<I>(&self, indices: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .filter_map(|i| self.primes.get(i))
            .map(Implicant::literal_count)
            .sum()
    }
}
