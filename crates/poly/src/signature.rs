use monomial::{Monomial, MonomialOrder};
use std::cmp::Ordering;

/// The leading term of a module element: a row index plus the monomial
/// leading that row's polynomial. Signatures order by row first (a smaller
/// row ranks *higher*, matching standard module term orders) and by
/// monomial order within the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub row: usize,
    pub monomial: Monomial,
}

impl Signature {
    pub fn new(row: usize, monomial: Monomial) -> Self {
        Signature { row, monomial }
    }

    pub fn compare<O: MonomialOrder>(&self, other: &Signature, order: &O) -> Ordering {
        // Smaller row ranks higher, so reverse the natural row comparison.
        match other.row.cmp(&self.row) {
            Ordering::Equal => order.compare(&self.monomial, &other.monomial),
            ord => ord,
        }
    }
}
