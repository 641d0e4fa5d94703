use crate::module_element::ModuleElement;
use crate::polynomial::Polynomial;
use crate::term::Term;
use arith::CoeffRing;
use monomial::{Monomial, MonomialOrder};

/// The capability the reducer and Buchberger engine are generic over:
/// "has a leading row/monomial/coefficient, and can be scaled and
/// subtracted". A plain polynomial is the `k = 1` case (row always `0`);
/// a [`ModuleElement`] generalises it to `k > 1`.
///
/// Implementations must leave `leading_row`/`leading_monomial`/
/// `leading_coeff` meaningful only when `!is_zero()`; callers always check
/// `is_zero()` first, matching how the data model treats a zero object as
/// having no leading term at all.
pub trait Graded<C: CoeffRing>: Clone + std::fmt::Debug + PartialEq {
    fn is_zero(&self) -> bool;
    fn leading_row(&self) -> usize;
    fn leading_monomial(&self) -> Option<Monomial>;
    fn leading_coeff(&self) -> Option<C>;
    /// Every `(row, monomial, coeff)` triple across the whole object, used
    /// by tail reduction's divisor search.
    fn all_terms(&self) -> Vec<(usize, Monomial, C)>;
    fn sub(&self, other: &Self) -> Self;
    fn scale(&self, term: &Term<C>) -> Self;
}

impl<C: CoeffRing, O: MonomialOrder> Graded<C> for Polynomial<C, O> {
    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
    fn leading_row(&self) -> usize {
        0
    }
    fn leading_monomial(&self) -> Option<Monomial> {
        Polynomial::leading_monomial(self).cloned()
    }
    fn leading_coeff(&self) -> Option<C> {
        Polynomial::leading_coeff(self).cloned()
    }
    fn all_terms(&self) -> Vec<(usize, Monomial, C)> {
        self.terms()
            .iter()
            .map(|t| (0, t.monomial.clone(), t.coeff.clone()))
            .collect()
    }
    fn sub(&self, other: &Self) -> Self {
        Polynomial::sub(self, other)
    }
    fn scale(&self, term: &Term<C>) -> Self {
        Polynomial::scale(self, term)
    }
}

impl<C: CoeffRing, O: MonomialOrder> Graded<C> for ModuleElement<C, O> {
    fn is_zero(&self) -> bool {
        ModuleElement::is_zero(self)
    }
    fn leading_row(&self) -> usize {
        ModuleElement::leading_row(self).unwrap_or(0)
    }
    fn leading_monomial(&self) -> Option<Monomial> {
        self.leading_signature().map(|s| s.monomial)
    }
    fn leading_coeff(&self) -> Option<C> {
        ModuleElement::leading_coeff(self).cloned()
    }
    fn all_terms(&self) -> Vec<(usize, Monomial, C)> {
        self.rows()
            .iter()
            .enumerate()
            .flat_map(|(row, poly)| {
                poly.terms()
                    .iter()
                    .map(move |t| (row, t.monomial.clone(), t.coeff.clone()))
            })
            .collect()
    }
    fn sub(&self, other: &Self) -> Self {
        ModuleElement::sub(self, other)
    }
    fn scale(&self, term: &Term<C>) -> Self {
        ModuleElement::scale(self, term)
    }
}
