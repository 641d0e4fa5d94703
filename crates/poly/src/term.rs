use arith::CoeffRing;
use monomial::Monomial;

/// A monomial paired with a coefficient. A well-formed `Term` never has a
/// zero coefficient; helpers that could produce one return `Option<Term>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Term<C: CoeffRing> {
    pub monomial: Monomial,
    pub coeff: C,
}

impl<C: CoeffRing> Term<C> {
    pub fn new(monomial: Monomial, coeff: C) -> Self {
        Term { monomial, coeff }
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    pub fn neg(&self) -> Term<C> {
        Term::new(self.monomial.clone(), self.coeff.neg())
    }

    pub fn mul(&self, other: &Term<C>) -> Term<C> {
        Term::new(self.monomial.mul(&other.monomial), self.coeff.mul(&other.coeff))
    }

    /// `self / divisor`, exact in both the monomial and the coefficient, or
    /// `None` if either division fails. This is the single primitive the
    /// reducer needs to decide whether one term cancels another.
    pub fn maybe_div(&self, divisor: &Term<C>) -> Option<Term<C>> {
        let m = divisor.monomial.maybe_div(&self.monomial)?;
        let c = self.coeff.maybe_div(&divisor.coeff)?;
        Some(Term::new(m, c))
    }
}
