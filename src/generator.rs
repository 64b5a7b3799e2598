//! Prime-implicant generation (Quine-McCluskey)
//!
//! Generation proceeds in rounds. Round 0 holds one implicant per distinct
//! on-set or don't-care minterm. Each round groups its implicants by the number
//! of `1` positions and tries to merge every implicant of group `k` with every
//! implicant of group `k + 1`. Merged implicants (deduplicated) form the next
//! round; implicants of the current round that merged with nothing are prime.
//! Generation stops at the first round that produces no merge.
//!
//! Primes are reported in discovery order: by round, then by group, then by
//! position within the group. Round 0 keeps the order in which minterms were
//! supplied, on-set before don't-cares.
//!
//! Rounds never mutate their input: a round returns the merged implicants and
//! the set of input positions that took part in a merge.
//!
//! The number of implicants can grow exponentially with the number of
//! variables. No pruning beyond deduplication is performed.

use std::collections::{BTreeMap, HashSet};

use bit_set::BitSet;
use log::{debug, trace};

use crate::error::DimensionError;
use crate::implicant::{check_minterm, check_num_vars, Implicant, Minterm};

/// Summary of one generation round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrace {
    /// Zero-based round number
    pub round: usize,
    /// Number of implicants entering the round
    pub input_len: usize,
    /// Group sizes keyed by number of `1` positions
    pub group_sizes: Vec<(usize, usize)>,
    /// Implicants entering the round, by group
    ///
    /// Only recorded when tracing is enabled on the generator.
    pub groups: Vec<(usize, Vec<Implicant>)>,
    /// Number of distinct merged implicants handed to the next round
    pub merged: usize,
    /// Prime implicants found in this round (not merged with anything)
    pub primes: Vec<Implicant>,
}

/// Result of prime-implicant generation
#[derive(Debug, Clone)]
pub struct PrimeImplicants {
    num_vars: usize,
    primes: Vec<Implicant>,
    rounds: Vec<RoundTrace>,
}

impl PrimeImplicants {
    /// Number of input variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The prime implicants, in order of discovery
    pub fn as_slice(&self) -> &[Implicant] {
        &self.primes
    }

    /// Number of prime implicants
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// True when no prime implicant was generated (empty on-set and don't-care set)
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Iterate over the prime implicants
    pub fn iter(&self) -> std::slice::Iter<'_, Implicant> {
        self.primes.iter()
    }

    /// Per-round trace of the generation
    pub fn rounds(&self) -> &[RoundTrace] {
        &self.rounds
    }

    /// Split into the prime implicants and the round trace
    pub fn into_parts(self) -> (Vec<Implicant>, Vec<RoundTrace>) {
        (self.primes, self.rounds)
    }
}

impl<'a> IntoIterator for &'a PrimeImplicants {
    type Item = &'a Implicant;
    type IntoIter = std::slice::Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}

/// Quine-McCluskey generator for a fixed number of variables
///
/// # Examples
///
/// ```
/// use qm_logic::ImplicantGenerator;
///
/// let generator = ImplicantGenerator::new(3).unwrap();
/// let primes = generator.find_prime_implicants(&[1, 3, 5, 7], &[]).unwrap();
///
/// let patterns: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
/// assert_eq!(patterns, vec!["--1"]);
/// ```
#[derive(Debug, Clone)]
pub struct ImplicantGenerator {
    num_vars: usize,
    trace: bool,
}

impl ImplicantGenerator {
    /// Create a generator for functions of `num_vars` variables
    pub fn new(num_vars: usize) -> Result<Self, DimensionError> {
        check_num_vars(num_vars)?;
        Ok(ImplicantGenerator {
            num_vars,
            trace: false,
        })
    }

    /// Record the grouped implicants of every round in the trace
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Compute every prime implicant of the function
    ///
    /// Don't-care minterms take part in merging but are not required to be
    /// covered later. Duplicated minterms (within or across the two lists) are
    /// seeded once. Every minterm must fit in `num_vars` bits.
    pub fn find_prime_implicants(
        &self,
        minterms: &[Minterm],
        dont_cares: &[Minterm],
    ) -> Result<PrimeImplicants, DimensionError> {
        // On-set first, then don't-cares, each minterm at its first occurrence
        let mut seen = HashSet::new();
        let mut seeds = Vec::with_capacity(minterms.len() + dont_cares.len());
        for &m in minterms.iter().chain(dont_cares) {
            check_minterm(m, self.num_vars)?;
            if seen.insert(m) {
                seeds.push(m);
            }
        }

        let mut current = seeds
            .into_iter()
            .map(|m| Implicant::from_minterm(m, self.num_vars))
            .collect::<Result<Vec<_>, _>>()?;

        let mut primes = Vec::new();
        let mut seen_primes = HashSet::new();
        let mut rounds = Vec::new();

        while !current.is_empty() {
            let round = combine_round(&current);
            let index = rounds.len();

            let found: Vec<Implicant> = round
                .groups
                .values()
                .flatten()
                .filter(|&&i| !round.consumed.contains(i))
                .map(|&i| current[i].clone())
                .collect();
            for prime in &found {
                if seen_primes.insert(prime.clone()) {
                    primes.push(prime.clone());
                }
            }

            debug!(
                "QM round {}: {} implicant(s) in {} group(s), {} merged, {} prime",
                index,
                current.len(),
                round.groups.len(),
                round.merged.len(),
                found.len()
            );

            rounds.push(RoundTrace {
                round: index,
                input_len: current.len(),
                group_sizes: round
                    .groups
                    .iter()
                    .map(|(ones, members)| (*ones, members.len()))
                    .collect(),
                groups: if self.trace {
                    round
                        .groups
                        .iter()
                        .map(|(ones, members)| {
                            (*ones, members.iter().map(|&i| current[i].clone()).collect())
                        })
                        .collect()
                } else {
                    Vec::new()
                },
                merged: round.merged.len(),
                primes: found,
            });

            current = round.merged;
        }

        debug!(
            "QM finished after {} round(s) with {} prime implicant(s)",
            rounds.len(),
            primes.len()
        );

        Ok(PrimeImplicants {
            num_vars: self.num_vars,
            primes,
            rounds,
        })
    }
}

/// Outcome of merging one round
struct Round {
    /// Input positions grouped by number of `1` positions
    groups: BTreeMap<usize, Vec<usize>>,
    /// Distinct merged implicants, in order of creation
    merged: Vec<Implicant>,
    /// Input positions that took part in at least one merge
    consumed: BitSet,
}

fn combine_round(cubes: &[Implicant]) -> Round {
    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, cube) in cubes.iter().enumerate() {
        groups.entry(cube.count_ones()).or_default().push(i);
    }

    let mut merged = Vec::new();
    let mut seen = HashSet::new();
    let mut consumed = BitSet::with_capacity(cubes.len());

    for (ones, lower) in &groups {
        let Some(upper) = groups.get(&(ones + 1)) else {
            continue;
        };
        for &i in lower {
            for &j in upper {
                if let Some(m) = cubes[i].combine(&cubes[j]) {
                    trace!("merge {} + {} -> {}", cubes[i], cubes[j], m);
                    consumed.insert(i);
                    consumed.insert(j);
                    if seen.insert(m.clone()) {
                        merged.push(m);
                    }
                }
            }
        }
    }

    Round {
        groups,
        merged,
        consumed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use test_log::test;

    fn patterns(primes: &PrimeImplicants) -> BTreeSet<String> {
        primes.iter().map(|p| p.to_string()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tautology_two_variables() {
        let generator = ImplicantGenerator::new(2).unwrap();
        let primes = generator.find_prime_implicants(&[0, 1, 2, 3], &[]).unwrap();
        assert_eq!(patterns(&primes), set(&["--"]));
        assert_eq!(primes.rounds().len(), 3);
    }

    #[test]
    fn test_last_variable_function() {
        let generator = ImplicantGenerator::new(3).unwrap();
        let primes = generator.find_prime_implicants(&[1, 3, 5, 7], &[]).unwrap();
        assert_eq!(patterns(&primes), set(&["--1"]));
        let p = &primes.as_slice()[0];
        assert_eq!(p.minterms().iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_classic_with_dont_cares() {
        let generator = ImplicantGenerator::new(4).unwrap();
        let primes = generator
            .find_prime_implicants(&[1, 3, 7, 11, 15], &[5, 9])
            .unwrap();
        // 0--1 covers 1,3,5,7; --11 covers 3,7,11,15; -0-1 covers 1,3,9,11
        assert_eq!(patterns(&primes), set(&["0--1", "-0-1", "--11"]));
    }

    #[test]
    fn test_xor_has_no_merges() {
        let generator = ImplicantGenerator::new(2).unwrap();
        let primes = generator.find_prime_implicants(&[1, 2], &[]).unwrap();
        assert_eq!(patterns(&primes), set(&["01", "10"]));
        assert_eq!(primes.rounds().len(), 1);
        assert_eq!(primes.rounds()[0].merged, 0);
    }

    #[test]
    fn test_primes_from_several_rounds() {
        // f = m(0,1,2,5,6,7): the classic cyclic chart, all primes are 2-minterm cubes
        let generator = ImplicantGenerator::new(3).unwrap();
        let primes = generator
            .find_prime_implicants(&[0, 1, 2, 5, 6, 7], &[])
            .unwrap();
        assert_eq!(
            patterns(&primes),
            set(&["00-", "0-0", "-01", "-10", "1-1", "11-"])
        );

        // A lone minterm is prime in round 0 while others keep merging
        let primes = generator.find_prime_implicants(&[0, 1, 2, 3, 7], &[]).unwrap();
        assert_eq!(patterns(&primes), set(&["0--", "-11"]));
    }

    #[test]
    fn test_duplicates_and_overlap_seeded_once() {
        let generator = ImplicantGenerator::new(2).unwrap();
        let primes = generator.find_prime_implicants(&[0, 0, 1], &[1]).unwrap();
        assert_eq!(patterns(&primes), set(&["0-"]));
        assert_eq!(primes.rounds()[0].input_len, 2);
    }

    #[test]
    fn test_primes_ordered_by_group() {
        let generator = ImplicantGenerator::new(3).unwrap();
        let primes = generator.find_prime_implicants(&[3, 4], &[]).unwrap();
        let order: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
        assert_eq!(order, vec!["100", "011"]);
        assert_eq!(primes.rounds()[0].primes, primes.as_slice());
    }

    #[test]
    fn test_seed_order_follows_input() {
        // Within a group, on-set minterms come first in the order given
        let generator = ImplicantGenerator::new(3).unwrap();
        let primes = generator.find_prime_implicants(&[4, 1], &[2]).unwrap();
        let order: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
        assert_eq!(order, vec!["100", "001", "010"]);

        // Later rounds keep group order too
        let primes = generator.find_prime_implicants(&[7, 6, 0, 1], &[]).unwrap();
        let order: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
        assert_eq!(order, vec!["00-", "11-"]);
    }

    #[test]
    fn test_empty_input() {
        let generator = ImplicantGenerator::new(3).unwrap();
        let primes = generator.find_prime_implicants(&[], &[]).unwrap();
        assert!(primes.is_empty());
        assert!(primes.rounds().is_empty());
    }

    #[test]
    fn test_rejects_out_of_range_minterm() {
        let generator = ImplicantGenerator::new(3).unwrap();
        let err = generator.find_prime_implicants(&[1, 8], &[]).unwrap_err();
        assert_eq!(
            err,
            DimensionError::MintermOutOfRange {
                minterm: 8,
                num_vars: 3
            }
        );
        let err = generator.find_prime_implicants(&[1], &[9]).unwrap_err();
        assert!(matches!(err, DimensionError::MintermOutOfRange { minterm: 9, .. }));
    }

    #[test]
    fn test_rejects_too_many_variables() {
        assert!(ImplicantGenerator::new(64).is_err());
        assert!(ImplicantGenerator::new(63).is_ok());
    }

    #[test]
    fn test_generation_is_idempotent() {
        let generator = ImplicantGenerator::new(4).unwrap();
        let minterms = [0, 2, 5, 6, 7, 8, 10, 12, 13, 14, 15];
        let dont_cares = [1, 4];
        let first = generator.find_prime_implicants(&minterms, &dont_cares).unwrap();
        let second = generator.find_prime_implicants(&minterms, &dont_cares).unwrap();
        let a: HashSet<Implicant> = first.iter().cloned().collect();
        let b: HashSet<Implicant> = second.iter().cloned().collect();
        assert_eq!(a, b);
        assert_eq!(first.as_slice(), second.as_slice());
    }

    #[test]
    fn test_primes_are_not_mergeable_or_contained() {
        let generator = ImplicantGenerator::new(4).unwrap();
        let primes = generator
            .find_prime_implicants(&[0, 1, 2, 5, 6, 7, 8, 9, 10, 14], &[])
            .unwrap();
        let primes = primes.as_slice();
        for (i, p) in primes.iter().enumerate() {
            for (j, q) in primes.iter().enumerate() {
                assert!(!p.can_combine_with(q), "{} merges with {}", p, q);
                if i != j {
                    assert!(!p.contains(q), "{} contains {}", p, q);
                }
            }
        }
    }

    #[test]
    fn test_trace_records_groups() {
        let generator = ImplicantGenerator::new(2).unwrap().with_trace(true);
        let primes = generator.find_prime_implicants(&[0, 1, 3], &[]).unwrap();
        let first = &primes.rounds()[0];
        assert_eq!(first.group_sizes, vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(first.groups.len(), 3);
        assert_eq!(first.groups[0].1[0].to_string(), "00");
        assert_eq!(first.merged, 2);

        let untraced = ImplicantGenerator::new(2).unwrap();
        let primes = untraced.find_prime_implicants(&[0, 1, 3], &[]).unwrap();
        assert!(primes.rounds()[0].groups.is_empty());
    }
}
