//! Monomial representation, arithmetic, and orderings.
//!
//! A [`Monomial`] is an exponent vector over a fixed number of variables.
//! Every engine in this workspace is parameterised over a [`MonomialOrder`]
//! rather than hard-coded to one ordering, so the reducer and Buchberger
//! engine never assume anything beyond the two properties a monomial order
//! must have: compatibility with multiplication, and `1` as minimum.

#![deny(warnings)]

use std::cmp::Ordering;

/// An exponent vector: `exponents[v]` is the power of variable `v`.
///
/// All monomials compared or combined together are expected to share the
/// same length (`num_vars`); mismatched lengths are a programmer error and
/// panic rather than silently zero-extending, since a silent mismatch would
/// mask a ring-compatibility bug upstream.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Monomial {
    pub exponents: Vec<u32>,
}

impl Monomial {
    pub fn new(exponents: Vec<u32>) -> Self {
        Monomial { exponents }
    }

    /// The identity monomial (all exponents zero) over `num_vars` variables.
    pub fn one(num_vars: usize) -> Self {
        Monomial {
            exponents: vec![0; num_vars],
        }
    }

    pub fn num_vars(&self) -> usize {
        self.exponents.len()
    }

    pub fn total_degree(&self) -> u32 {
        self.exponents.iter().sum()
    }

    pub fn is_one(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// `self | other`: does `self` divide `other`?
    pub fn divides(&self, other: &Monomial) -> bool {
        debug_assert_eq!(self.num_vars(), other.num_vars());
        self.exponents
            .iter()
            .zip(other.exponents.iter())
            .all(|(a, b)| a <= b)
    }

    /// `other / self`, when `self` divides `other`; `None` otherwise.
    pub fn maybe_div(&self, other: &Monomial) -> Option<Monomial> {
        if !self.divides(other) {
            return None;
        }
        Some(Monomial::new(
            other
                .exponents
                .iter()
                .zip(self.exponents.iter())
                .map(|(a, b)| a - b)
                .collect(),
        ))
    }

    /// Pointwise sum of exponents.
    pub fn mul(&self, other: &Monomial) -> Monomial {
        debug_assert_eq!(self.num_vars(), other.num_vars());
        Monomial::new(
            self.exponents
                .iter()
                .zip(other.exponents.iter())
                .map(|(a, b)| a + b)
                .collect(),
        )
    }

    /// Pointwise maximum of exponents.
    pub fn lcm(&self, other: &Monomial) -> Monomial {
        debug_assert_eq!(self.num_vars(), other.num_vars());
        Monomial::new(
            self.exponents
                .iter()
                .zip(other.exponents.iter())
                .map(|(a, b)| (*a).max(*b))
                .collect(),
        )
    }

    /// `(lcm/self, lcm/other)`, the pair of terms realising an S-polynomial
    /// cancellation of `self` and `other`.
    pub fn lcm_multipliers(&self, other: &Monomial) -> (Monomial, Monomial) {
        let l = self.lcm(other);
        (
            self.maybe_div(&l).expect("lcm is always a multiple of self"),
            other.maybe_div(&l).expect("lcm is always a multiple of other"),
        )
    }

    pub fn lcm_degree(&self, other: &Monomial) -> u32 {
        self.lcm(other).total_degree()
    }

    /// All divisors of `self`, in no particular order, for the reducer's
    /// fast divisor-lookup path: enumerate the product `∏(0..=e_i)` over
    /// nonzero exponents.
    pub fn divisors(&self) -> Vec<Monomial> {
        let n = self.num_vars();
        let mut out = vec![vec![0u32; n]];
        for (v, &e) in self.exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            let mut next = Vec::with_capacity(out.len() * (e as usize + 1));
            for exps in &out {
                for k in 0..=e {
                    let mut cand = exps.clone();
                    cand[v] = k;
                    next.push(cand);
                }
            }
            out = next;
        }
        out.into_iter().map(Monomial::new).collect()
    }
}

/// A total order on monomials, compatible with multiplication and with `1`
/// as minimum. Implementations must satisfy: `a < b ⇒ a·c < b·c` for all
/// `c`, and `1 ≤ m` for all `m`.
pub trait MonomialOrder: Clone + std::fmt::Debug {
    fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering;

    fn max<'a>(&self, a: &'a Monomial, b: &'a Monomial) -> &'a Monomial {
        match self.compare(a, b) {
            Ordering::Less => b,
            _ => a,
        }
    }
}

/// Pure lexicographic order: compare exponents left to right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lex;

impl MonomialOrder for Lex {
    fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        a.exponents.cmp(&b.exponents)
    }
}

/// Graded lexicographic order: total degree first, lex to break ties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrLex;

impl MonomialOrder for GrLex {
    fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match a.total_degree().cmp(&b.total_degree()) {
            Ordering::Equal => Lex.compare(a, b),
            ord => ord,
        }
    }
}

/// Graded reverse lexicographic order: total degree first, then reverse
/// lex (smaller in the *last* differing variable ranks higher) to break
/// ties. This is the order used throughout the end-to-end scenarios.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GRevLex;

impl MonomialOrder for GRevLex {
    fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match a.total_degree().cmp(&b.total_degree()) {
            Ordering::Equal => {
                for (ea, eb) in a.exponents.iter().rev().zip(b.exponents.iter().rev()) {
                    match eb.cmp(ea) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                Ordering::Equal
            }
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_and_maybe_div_roundtrip() {
        let a = Monomial::new(vec![2, 1]);
        let b = Monomial::new(vec![1, 1]);
        assert!(b.divides(&a));
        let q = b.maybe_div(&a).unwrap();
        assert_eq!(q, Monomial::new(vec![1, 0]));
        assert_eq!(q.mul(&b), a);
    }

    #[test]
    fn maybe_div_none_when_not_divisible() {
        let a = Monomial::new(vec![1, 0]);
        let b = Monomial::new(vec![0, 1]);
        assert!(b.maybe_div(&a).is_none());
    }

    #[test]
    fn lcm_multipliers_cancel_to_the_same_monomial() {
        let a = Monomial::new(vec![2, 0]);
        let b = Monomial::new(vec![0, 3]);
        let (ma, mb) = a.lcm_multipliers(&b);
        assert_eq!(a.mul(&ma), b.mul(&mb));
    }

    #[test]
    fn one_is_minimum_under_every_order() {
        let one = Monomial::one(2);
        let m = Monomial::new(vec![1, 0]);
        assert_eq!(Lex.compare(&one, &m), Ordering::Less);
        assert_eq!(GrLex.compare(&one, &m), Ordering::Less);
        assert_eq!(GRevLex.compare(&one, &m), Ordering::Less);
    }

    #[test]
    fn grevlex_matches_the_textbook_example() {
        // x^1 y^2 vs x^2 y^0: equal degree 3 vs degree 2 -- use equal-degree pair instead
        let a = Monomial::new(vec![1, 2]);
        let b = Monomial::new(vec![2, 1]);
        // Same total degree 3; grevlex compares the *last* variable reversed:
        // a's y-exponent (2) vs b's y-exponent (1): smaller loses in reverse,
        // so b (y=1) ranks higher than a (y=2).
        assert_eq!(GRevLex.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn divisors_enumerates_the_full_product() {
        let m = Monomial::new(vec![1, 2]);
        let divs = m.divisors();
        assert_eq!(divs.len(), 2 * 3);
        assert!(divs.contains(&Monomial::new(vec![0, 0])));
        assert!(divs.contains(&Monomial::new(vec![1, 2])));
    }

    #[test]
    fn order_is_compatible_with_multiplication() {
        let a = Monomial::new(vec![1, 0]);
        let b = Monomial::new(vec![0, 1]);
        let c = Monomial::new(vec![2, 3]);
        for order in [GRevLex.compare(&a, &b)] {
            let _ = order;
        }
        let ac = a.mul(&c);
        let bc = b.mul(&c);
        // whatever a vs b's relation is under GrLex, multiplying both by c
        // must preserve it
        let direct = GrLex.compare(&a, &b);
        let scaled = GrLex.compare(&ac, &bc);
        assert_eq!(direct, scaled);
    }
}
