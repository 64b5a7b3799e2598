//! Product terms of Petrick's expression

use std::cmp::Ordering;
use std::fmt;

use bit_set::BitSet;

/// A conjunction of prime-implicant indices
///
/// Stored as a bit set, so two terms holding the same indices are equal and
/// hash the same regardless of how they were built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PetrickTerm(BitSet);

impl PetrickTerm {
    /// The term holding a single implicant
    pub fn singleton(index: usize) -> Self {
        let mut set = BitSet::new();
        set.insert(index);
        PetrickTerm(set)
    }

    /// Number of implicants in the term
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty conjunction
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(index)
    }

    /// Implicant indices, ascending
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter()
    }

    /// This term with `index` added
    pub fn with(&self, index: usize) -> Self {
        let mut set = self.0.clone();
        set.insert(index);
        PetrickTerm(set)
    }

    /// True when every index of `self` is in `other` and `other` has more
    pub fn is_strict_subset_of(&self, other: &PetrickTerm) -> bool {
        self.0.len() < other.0.len() && self.0.is_subset(&other.0)
    }

    /// The underlying bit set
    pub fn as_bit_set(&self) -> &BitSet {
        &self.0
    }
}

/// Lexicographic over the ascending index sequence, so `{0, 4}` precedes
/// `{0, 4, 5}`, which precedes `{1}`
impl Ord for PetrickTerm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl PartialOrd for PetrickTerm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromIterator<usize> for PetrickTerm {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        PetrickTerm(iter.into_iter().collect())
    }
}

impl fmt::Display for PetrickTerm {
    /// Implicants are labelled `PI1`, `PI2`, ... (one-based), joined by `·`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "1");
        }
        for (n, index) in self.iter().enumerate() {
            if n > 0 {
                write!(f, "·")?;
            }
            write!(f, "PI{}", index + 1)?;
        }
        Ok(())
    }
}
