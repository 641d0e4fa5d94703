use crate::polynomial::Polynomial;
use crate::signature::Signature;
use crate::term::Term;
use arith::CoeffRing;
use monomial::MonomialOrder;

/// A fixed-length vector of polynomials. The *leading row* is the smallest
/// index with a nonzero entry; the *leading term* is the `Signature`
/// `(row, leading_term(rows[row]))`.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleElement<C: CoeffRing, O: MonomialOrder> {
    rows: Vec<Polynomial<C, O>>,
}

impl<C: CoeffRing, O: MonomialOrder> ModuleElement<C, O> {
    pub fn new(rows: Vec<Polynomial<C, O>>) -> Self {
        assert!(!rows.is_empty(), "module elements have length k >= 1");
        ModuleElement { rows }
    }

    pub fn zero(k: usize, num_vars: usize, order: O) -> Self
    where
        O: Clone,
    {
        assert!(k >= 1);
        let rows = (0..k)
            .map(|_| Polynomial::zero(num_vars, order.clone()))
            .collect();
        ModuleElement { rows }
    }

    /// A module element with `poly` in row `row` and zero elsewhere.
    pub fn from_row(row: usize, k: usize, poly: Polynomial<C, O>) -> Self
    where
        O: Clone,
    {
        assert!(row < k);
        let num_vars = poly.num_vars();
        let order = poly.order().clone();
        let mut rows: Vec<Polynomial<C, O>> = (0..k)
            .map(|_| Polynomial::zero(num_vars, order.clone()))
            .collect();
        rows[row] = poly;
        ModuleElement { rows }
    }

    pub fn rows(&self) -> &[Polynomial<C, O>] {
        &self.rows
    }

    pub fn k(&self) -> usize {
        self.rows.len()
    }

    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(|r| r.is_zero())
    }

    pub fn leading_row(&self) -> Option<usize> {
        self.rows.iter().position(|r| !r.is_zero())
    }

    pub fn leading_signature(&self) -> Option<Signature> {
        let row = self.leading_row()?;
        let m = self.rows[row].leading_monomial()?.clone();
        Some(Signature::new(row, m))
    }

    pub fn leading_coeff(&self) -> Option<&C> {
        let row = self.leading_row()?;
        self.rows[row].leading_coeff()
    }

    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.k(), other.k());
        ModuleElement {
            rows: self
                .rows
                .iter()
                .zip(other.rows.iter())
                .map(|(a, b)| a.add(b))
                .collect(),
        }
    }

    pub fn neg(&self) -> Self {
        ModuleElement {
            rows: self.rows.iter().map(Polynomial::neg).collect(),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies every row by a single term, distributing across the
    /// whole vector. Used to build `m_a * a` for module-element
    /// S-polynomials.
    pub fn scale(&self, term: &Term<C>) -> Self {
        ModuleElement {
            rows: self.rows.iter().map(|r| r.scale(term)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith::Rational;
    use monomial::{GRevLex, Monomial};

    fn poly(exps: Vec<u32>, n: i64) -> Polynomial<Rational, GRevLex> {
        Polynomial::from_terms(
            vec![Term::new(Monomial::new(exps), Rational::new(n, 1))],
            2,
            GRevLex,
        )
    }

    #[test]
    fn leading_row_is_the_first_nonzero_row() {
        let v = ModuleElement::from_row(1, 2, poly(vec![0, 1], 1));
        assert_eq!(v.leading_row(), Some(1));
    }

    #[test]
    fn row_mismatched_elements_do_not_cancel_via_sub() {
        let a = ModuleElement::from_row(0, 2, poly(vec![1, 0], 1));
        let b = ModuleElement::from_row(1, 2, poly(vec![0, 1], 1));
        let d = a.sub(&b);
        assert_eq!(d.leading_row(), Some(0));
        assert_eq!(d.rows()[1].leading_term().unwrap().coeff, Rational::new(-1, 1));
    }
}
