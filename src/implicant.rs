//! Implicants: ternary cubes together with the minterms they cover
//!
//! An [`Implicant`] is a product term over a fixed number of input variables.
//! Each position is fixed to `0` (`Some(false)`), fixed to `1` (`Some(true)`)
//! or free (`None`, written `-`). Position 0 is the most significant bit of a
//! minterm index, so the pattern `01` denotes minterm 1 and position `i`
//! corresponds to input variable `i` of a PLA row.
//!
//! The covered minterm set is always the exact expansion of the pattern; it is
//! carried alongside the bits so that coverage queries are a set lookup.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{DimensionError, PatternError};

/// Index of a fully specified input combination
pub type Minterm = u64;

/// Largest number of variables whose minterm indices fit in a [`Minterm`]
pub const MAX_VARIABLES: usize = 63;

/// A product term and the set of minterms it represents
///
/// Implicants are immutable once built. Two implicants compare equal when
/// both their patterns and their minterm sets are equal; since the set is
/// derived from the pattern, this is the same as comparing patterns.
///
/// # Examples
///
/// ```
/// use qm_logic::Implicant;
///
/// let a = Implicant::from_minterm(0b1001, 4).unwrap();
/// let b = Implicant::from_minterm(0b1011, 4).unwrap();
///
/// let merged = a.combine(&b).unwrap();
/// assert_eq!(merged.to_string(), "10-1");
/// assert_eq!(merged.literal_count(), 3);
/// assert!(merged.covers(9) && merged.covers(11));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Implicant {
    bits: Arc<[Option<bool>]>,
    minterms: BTreeSet<Minterm>,
}

impl Implicant {
    /// Create the implicant of a single minterm over `num_vars` variables
    pub fn from_minterm(minterm: Minterm, num_vars: usize) -> Result<Self, DimensionError> {
        check_minterm(minterm, num_vars)?;
        let bits: Vec<Option<bool>> = (0..num_vars)
            .map(|pos| Some((minterm >> (num_vars - 1 - pos)) & 1 == 1))
            .collect();
        Ok(Implicant {
            bits: bits.into(),
            minterms: BTreeSet::from([minterm]),
        })
    }

    /// Create an implicant from a ternary pattern, deriving its minterms
    pub fn from_pattern(bits: &[Option<bool>]) -> Result<Self, DimensionError> {
        if bits.len() > MAX_VARIABLES {
            return Err(DimensionError::TooManyVariables {
                requested: bits.len(),
                max: MAX_VARIABLES,
            });
        }
        Ok(Implicant {
            bits: bits.into(),
            minterms: expand_pattern(bits),
        })
    }

    /// Number of variables (pattern width)
    pub fn num_vars(&self) -> usize {
        self.bits.len()
    }

    /// The ternary pattern
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// The minterms covered by this implicant, in ascending order
    pub fn minterms(&self) -> &BTreeSet<Minterm> {
        &self.minterms
    }

    /// Test whether this implicant covers a specific minterm
    pub fn covers(&self, minterm: Minterm) -> bool {
        self.minterms.contains(&minterm)
    }

    /// Number of positions fixed to `1`, used to group implicants
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == Some(true)).count()
    }

    /// Number of fixed (non-`-`) positions
    ///
    /// This is the literal cost of the product term, shared by the solver's
    /// tie-break and by the statistics of written covers.
    pub fn literal_count(&self) -> usize {
        self.bits.iter().filter(|b| b.is_some()).count()
    }

    /// Test whether the two implicants can be merged
    ///
    /// They can when they have the same width, the same free positions, and
    /// differ in exactly one fixed position.
    pub fn can_combine_with(&self, other: &Implicant) -> bool {
        self.differing_position(other).is_some()
    }

    /// Merge two adjacent implicants, freeing the position where they differ
    ///
    /// Returns `None` when [`can_combine_with`](Self::can_combine_with) is false.
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        let pos = self.differing_position(other)?;
        let mut bits = self.bits.to_vec();
        bits[pos] = None;
        let minterms = self.minterms.union(&other.minterms).copied().collect();
        Some(Implicant {
            bits: bits.into(),
            minterms,
        })
    }

    /// Test whether every minterm of `other` is also covered by this implicant
    ///
    /// Holds when each fixed position of `self` is fixed to the same value in
    /// `other`.
    pub fn contains(&self, other: &Implicant) -> bool {
        self.bits.len() == other.bits.len()
            && self
                .bits
                .iter()
                .zip(other.bits.iter())
                .all(|(mine, theirs)| mine.is_none() || mine == theirs)
    }

    fn differing_position(&self, other: &Implicant) -> Option<usize> {
        if self.bits.len() != other.bits.len() {
            return None;
        }
        let mut found = None;
        for (pos, (a, b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            if a == b {
                continue;
            }
            // A free position facing a fixed one never merges
            if a.is_none() || b.is_none() || found.is_some() {
                return None;
            }
            found = Some(pos);
        }
        found
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            let c = match bit {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Implicant {
    type Err = PatternError;

    /// Parse a pattern such as `"1-0"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' => Ok(None),
                _ => Err(PatternError::InvalidCharacter {
                    character,
                    position,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Implicant::from_pattern(&bits)?)
    }
}

/// Check that a minterm index fits in `num_vars` bits
pub(crate) fn check_minterm(minterm: Minterm, num_vars: usize) -> Result<(), DimensionError> {
    check_num_vars(num_vars)?;
    if minterm >> num_vars != 0 {
        return Err(DimensionError::MintermOutOfRange { minterm, num_vars });
    }
    Ok(())
}

pub(crate) fn check_num_vars(num_vars: usize) -> Result<(), DimensionError> {
    if num_vars > MAX_VARIABLES {
        return Err(DimensionError::TooManyVariables {
            requested: num_vars,
            max: MAX_VARIABLES,
        });
    }
    Ok(())
}

/// Expand the free positions of a pattern into every minterm it matches
///
/// The number of minterms doubles with each free position.
pub(crate) fn expand_pattern(bits: &[Option<bool>]) -> BTreeSet<Minterm> {
    let mut values: Vec<Minterm> = vec![0];
    for bit in bits {
        values = match bit {
            Some(b) => values.into_iter().map(|v| (v << 1) | *b as Minterm).collect(),
            None => values
                .into_iter()
                .flat_map(|v| [v << 1, (v << 1) | 1])
                .collect(),
        };
    }
    values.into_iter().collect()
}
