use crate::term::Term;
use arith::CoeffRing;
use monomial::{Monomial, MonomialOrder};
use std::collections::HashMap;

/// A finite ordered sequence of distinct-monomial nonzero terms, sorted
/// descending under `order`. No two terms share a monomial; no term has a
/// zero coefficient; `is_zero()` iff the sequence is empty; `leading_term`
/// is always the first term.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<C: CoeffRing, O: MonomialOrder> {
    terms: Vec<Term<C>>,
    num_vars: usize,
    order: O,
}

impl<C: CoeffRing, O: MonomialOrder> Polynomial<C, O> {
    pub fn zero(num_vars: usize, order: O) -> Self {
        Polynomial {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    pub fn constant(c: C, num_vars: usize, order: O) -> Self {
        if c.is_zero() {
            return Polynomial::zero(num_vars, order);
        }
        Polynomial {
            terms: vec![Term::new(Monomial::one(num_vars), c)],
            num_vars,
            order,
        }
    }

    /// Builds a polynomial from arbitrary (possibly duplicate-monomial,
    /// possibly zero-coefficient) terms: combines terms sharing a monomial,
    /// drops the ones that sum to zero, and sorts descending under `order`.
    pub fn from_terms(terms: Vec<Term<C>>, num_vars: usize, order: O) -> Self {
        let mut by_monomial: HashMap<Monomial, C> = HashMap::new();
        for t in terms {
            by_monomial
                .entry(t.monomial.clone())
                .and_modify(|acc| *acc = acc.add(&t.coeff))
                .or_insert(t.coeff);
        }
        let mut combined: Vec<Term<C>> = by_monomial
            .into_iter()
            .filter(|(_, c)| !c.is_zero())
            .map(|(m, c)| Term::new(m, c))
            .collect();
        combined.sort_by(|a, b| order.compare(&b.monomial, &a.monomial));
        Polynomial {
            terms: combined,
            num_vars,
            order,
        }
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[Term<C>] {
        &self.terms
    }

    pub fn leading_term(&self) -> Option<&Term<C>> {
        self.terms.first()
    }

    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.leading_term().map(|t| &t.monomial)
    }

    pub fn leading_coeff(&self) -> Option<&C> {
        self.leading_term().map(|t| &t.coeff)
    }

    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars, other.num_vars);
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Polynomial::from_terms(terms, self.num_vars, self.order.clone())
    }

    pub fn neg(&self) -> Self {
        Polynomial {
            terms: self.terms.iter().map(Term::neg).collect(),
            num_vars: self.num_vars,
            order: self.order.clone(),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies every term by a single term, distributing over the whole
    /// polynomial. Used to build `m_a * a` when forming S-polynomials.
    pub fn scale(&self, term: &Term<C>) -> Self {
        if term.is_zero() {
            return Polynomial::zero(self.num_vars, self.order.clone());
        }
        Polynomial {
            terms: self.terms.iter().map(|t| t.mul(term)).collect(),
            num_vars: self.num_vars,
            order: self.order.clone(),
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars, other.num_vars);
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                terms.push(a.mul(b));
            }
        }
        Polynomial::from_terms(terms, self.num_vars, self.order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith::Rational;
    use monomial::GRevLex;

    fn t(exps: Vec<u32>, n: i64) -> Term<Rational> {
        Term::new(Monomial::new(exps), Rational::new(n, 1))
    }

    #[test]
    fn from_terms_combines_and_sorts() {
        let p = Polynomial::from_terms(
            vec![t(vec![1, 0], 1), t(vec![0, 1], 1), t(vec![1, 0], 1)],
            2,
            GRevLex,
        );
        assert_eq!(p.terms().len(), 2);
        assert_eq!(p.leading_term().unwrap().coeff, Rational::new(2, 1));
    }

    #[test]
    fn sub_self_is_zero() {
        let p = Polynomial::from_terms(vec![t(vec![2, 0], 1), t(vec![0, 1], 3)], 2, GRevLex);
        assert!(p.sub(&p).is_zero());
    }

    #[test]
    fn scale_distributes_and_multiplies_coefficients() {
        let p = Polynomial::from_terms(vec![t(vec![1, 0], 2)], 2, GRevLex);
        let scaled = p.scale(&t(vec![0, 1], 3));
        assert_eq!(scaled.leading_term().unwrap().monomial, Monomial::new(vec![1, 1]));
        assert_eq!(scaled.leading_term().unwrap().coeff, Rational::new(6, 1));
    }
}
