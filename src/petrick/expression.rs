//! Sum-of-products expressions over prime-implicant indices

use std::collections::HashSet;

use super::term::PetrickTerm;

/// A disjunction of distinct [`PetrickTerm`]s
///
/// Products keep the order in which they were first generated; after
/// [`absorb`](PetrickExpression::absorb) the terms are sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetrickExpression {
    terms: Vec<PetrickTerm>,
}

impl PetrickExpression {
    /// The expression `1`: a single empty product
    ///
    /// Multiplying it by a clause yields one singleton term per clause member.
    pub fn unit() -> Self {
        PetrickExpression {
            terms: vec![PetrickTerm::default()],
        }
    }

    /// Build an expression from terms, dropping repeats
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = PetrickTerm>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();
        PetrickExpression { terms }
    }

    pub fn terms(&self) -> &[PetrickTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PetrickTerm> {
        self.terms.iter()
    }

    /// Distribute a clause (a sum of implicant indices) over this expression
    ///
    /// Every existing term is extended with every clause member; repeated
    /// products are kept once. Absorption is not applied.
    pub fn multiply(&self, clause: &[usize]) -> Self {
        self.multiply_bounded(clause, usize::MAX)
            .unwrap_or_else(|| PetrickExpression { terms: Vec::new() })
    }

    /// Like [`multiply`](Self::multiply), giving up once the product holds
    /// more than `limit` terms
    pub fn multiply_bounded(&self, clause: &[usize], limit: usize) -> Option<Self> {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        for term in &self.terms {
            for &index in clause {
                let product = term.with(index);
                if seen.insert(product.clone()) {
                    terms.push(product);
                    if terms.len() > limit {
                        return None;
                    }
                }
            }
        }
        Some(PetrickExpression { terms })
    }

    /// Apply absorption: drop every term that strictly contains another term
    ///
    /// The result is an antichain under set inclusion, sorted by ascending
    /// index sequence. Selection ties are broken by this order.
    pub fn absorb(&self) -> Self {
        let mut terms: Vec<PetrickTerm> = self
            .terms
            .iter()
            .filter(|t| !self.terms.iter().any(|s| s.is_strict_subset_of(t)))
            .cloned()
            .collect();
        terms.sort();
        PetrickExpression { terms }
    }

    /// True when no term is a strict subset of another
    pub fn is_antichain(&self) -> bool {
        self.terms.iter().all(|t| {
            self.terms
                .iter()
                .all(|s| !s.is_strict_subset_of(t))
        })
    }

    /// Terms with the fewest implicants, in expression order
    pub fn candidates(&self) -> Vec<&PetrickTerm> {
        let Some(min) = self.terms.iter().map(PetrickTerm::len).min() else {
            return Vec::new();
        };
        self.terms.iter().filter(|t| t.len() == min).collect()
    }

    /// Pick the cheapest term
    ///
    /// Terms are ranked by number of implicants, then by `cost`, then by
    /// position in the expression. Returns the position and the term.
    pub fn select_minimal<F>(&self, cost: F) -> Option<(usize, &PetrickTerm)>
    where
        F: Fn(&PetrickTerm) -> usize,
    {
        self.terms
            .iter()
            .enumerate()
            .min_by_key(|(position, term)| (term.len(), cost(term), *position))
    }
}

impl<'a> IntoIterator for &'a PetrickExpression {
    type Item = &'a PetrickTerm;
    type IntoIter = std::slice::Iter<'a, PetrickTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(indices: &[usize]) -> PetrickTerm {
        indices.iter().copied().collect()
    }

    #[test]
    fn test_unit_times_clause() {
        let e = PetrickExpression::unit().multiply(&[0, 2]);
        assert_eq!(e.terms(), &[term(&[0]), term(&[2])]);
    }

    #[test]
    fn test_multiply_deduplicates() {
        // (P0 + P1)(P0 + P2) = P0 + P0P2 + P0P1 + P1P2
        let e = PetrickExpression::unit().multiply(&[0, 1]).multiply(&[0, 2]);
        assert_eq!(
            e.terms(),
            &[term(&[0]), term(&[0, 2]), term(&[0, 1]), term(&[1, 2])]
        );
    }

    #[test]
    fn test_absorb_yields_antichain() {
        let e = PetrickExpression::unit().multiply(&[0, 1]).multiply(&[0, 2]);
        assert!(!e.is_antichain());
        let simplified = e.absorb();
        assert_eq!(simplified.terms(), &[term(&[0]), term(&[1, 2])]);
        assert!(simplified.is_antichain());
    }

    #[test]
    fn test_absorb_sorts_survivors() {
        // (P3 + P0)(P4 + P1): expansion order is P3P4, P1P3, P0P4, P0P1
        let e = PetrickExpression::unit().multiply(&[3, 0]).multiply(&[4, 1]);
        assert_eq!(e.terms()[0], term(&[3, 4]));
        let simplified = e.absorb();
        assert_eq!(
            simplified.terms(),
            &[term(&[0, 1]), term(&[0, 4]), term(&[1, 3]), term(&[3, 4])]
        );
        // Equal size and cost: the smallest index sequence wins
        let (pos, t) = simplified.select_minimal(|_| 0).unwrap();
        assert_eq!((pos, t), (0, &term(&[0, 1])));
    }

    #[test]
    fn test_multiply_bounded() {
        let e = PetrickExpression::unit().multiply(&[0, 1]);
        assert!(e.multiply_bounded(&[2, 3], 3).is_none());
        assert_eq!(e.multiply_bounded(&[2, 3], 4).map(|e| e.len()), Some(4));
    }

    #[test]
    fn test_select_minimal_tie_breaks() {
        let e = PetrickExpression::from_terms([term(&[0, 1]), term(&[2, 3]), term(&[4]), term(&[5])]);
        // Fewest implicants wins before cost
        let (pos, t) = e.select_minimal(|_| 0).unwrap();
        assert_eq!((pos, t), (2, &term(&[4])));
        // Cost breaks ties between equal sizes
        let (pos, _) = e.select_minimal(|t| if t.contains(4) { 3 } else { 1 }).unwrap();
        assert_eq!(pos, 3);
        assert_eq!(e.candidates(), vec![&term(&[4]), &term(&[5])]);
    }

    #[test]
    fn test_from_terms_dedup() {
        let e = PetrickExpression::from_terms([term(&[1]), term(&[1]), term(&[0])]);
        assert_eq!(e.len(), 2);
        assert!(PetrickExpression::from_terms(Vec::new()).select_minimal(|_| 0).is_none());
    }
}
