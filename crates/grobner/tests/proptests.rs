//! Property-based tests for the reducer: the `divrem` invariant
//! (`f == r + sum(q_i * basis[i])`) and the "no leading monomial of any
//! basis element divides any monomial of the remainder" postcondition,
//! exercised over randomly generated polynomials and bases (spec §8,
//! items 1 and 3).

use arith::Rational;
use grobner::{divrem, rem, Monomial};
use monomial::GRevLex;
use poly::{Polynomial, Term};
use proptest::prelude::*;

const NUM_VARS: usize = 2;

fn exponent() -> impl Strategy<Value = u32> {
    0u32..4
}

fn coeff() -> impl Strategy<Value = i64> {
    prop_oneof![(-5i64..=-1), (1i64..=5)]
}

fn term() -> impl Strategy<Value = Term<Rational>> {
    (prop::collection::vec(exponent(), NUM_VARS), coeff())
        .prop_map(|(e, c)| Term::new(Monomial::new(e), Rational::new(c, 1)))
}

fn polynomial() -> impl Strategy<Value = Polynomial<Rational, GRevLex>> {
    prop::collection::vec(term(), 0..5).prop_map(|ts| Polynomial::from_terms(ts, NUM_VARS, GRevLex))
}

fn nonzero_basis() -> impl Strategy<Value = Vec<Polynomial<Rational, GRevLex>>> {
    prop::collection::vec(polynomial(), 0..4).prop_map(|v| v.into_iter().filter(|p| !p.is_zero()).collect())
}

fn no_monomial_divides_remainder(basis: &[Polynomial<Rational, GRevLex>], r: &Polynomial<Rational, GRevLex>) -> bool {
    r.terms().iter().all(|t| {
        basis
            .iter()
            .all(|g| !g.is_zero() && !g.leading_monomial().unwrap().divides(&t.monomial))
    })
}

proptest! {
    #[test]
    fn divrem_reconstructs_the_dividend(f in polynomial(), basis in nonzero_basis()) {
        let (q, r) = divrem(&f, &basis, NUM_VARS, &GRevLex);
        let mut reconstructed = r.clone();
        for (qi, gi) in q.iter().zip(basis.iter()) {
            reconstructed = reconstructed.add(&qi.mul(gi));
        }
        prop_assert_eq!(reconstructed, f);
    }

    #[test]
    fn divrem_remainder_has_no_reducible_monomial(f in polynomial(), basis in nonzero_basis()) {
        let (_, r) = divrem(&f, &basis, NUM_VARS, &GRevLex);
        prop_assert!(no_monomial_divides_remainder(&basis, &r));
    }

    #[test]
    fn rem_is_idempotent(f in polynomial(), basis in nonzero_basis()) {
        let r1 = rem(&f, &basis, NUM_VARS, &GRevLex);
        let r2 = rem(&r1, &basis, NUM_VARS, &GRevLex);
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn rem_against_empty_basis_is_the_identity(f in polynomial()) {
        let r = rem(&f, &[], NUM_VARS, &GRevLex);
        prop_assert_eq!(r, f);
    }
}
