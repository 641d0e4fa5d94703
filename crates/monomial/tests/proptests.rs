//! Property-based tests for monomial arithmetic and the shipped orders:
//! totality, compatibility with multiplication, and `1` as minimum — the
//! two properties the reducer and Buchberger engine are allowed to assume
//! about any `MonomialOrder` (spec §3).

use monomial::{GRevLex, GrLex, Lex, Monomial, MonomialOrder};
use proptest::prelude::*;
use std::cmp::Ordering;

const NUM_VARS: usize = 3;

fn exponent() -> impl Strategy<Value = u32> {
    0u32..6
}

fn monomial() -> impl Strategy<Value = Monomial> {
    prop::collection::vec(exponent(), NUM_VARS).prop_map(Monomial::new)
}

fn check_order<O: MonomialOrder>(order: &O, a: &Monomial, b: &Monomial, c: &Monomial) {
    // Totality: exactly one of <, =, > holds, and `compare` is antisymmetric.
    let ab = order.compare(a, b);
    let ba = order.compare(b, a);
    assert_eq!(ab.reverse(), ba);

    // 1 is the minimum under every order.
    let one = Monomial::one(NUM_VARS);
    assert_ne!(order.compare(&one, a), Ordering::Greater);

    // Compatibility with multiplication: a < b implies a*c < b*c (and
    // likewise for = and >, since multiplying by c is injective on the
    // order here).
    let ac = a.mul(c);
    let bc = b.mul(c);
    assert_eq!(ab, order.compare(&ac, &bc));
}

proptest! {
    #[test]
    fn lex_is_a_compatible_total_order(a in monomial(), b in monomial(), c in monomial()) {
        check_order(&Lex, &a, &b, &c);
    }

    #[test]
    fn grlex_is_a_compatible_total_order(a in monomial(), b in monomial(), c in monomial()) {
        check_order(&GrLex, &a, &b, &c);
    }

    #[test]
    fn grevlex_is_a_compatible_total_order(a in monomial(), b in monomial(), c in monomial()) {
        check_order(&GRevLex, &a, &b, &c);
    }

    #[test]
    fn divides_and_maybe_div_are_consistent(a in monomial(), b in monomial()) {
        let lcm = a.lcm(&b);
        // Both a and b always divide their lcm, and the quotient divides back.
        prop_assert!(a.divides(&lcm));
        prop_assert!(b.divides(&lcm));
        let qa = a.maybe_div(&lcm).unwrap();
        prop_assert_eq!(qa.mul(&a), lcm.clone());
    }

    #[test]
    fn lcm_multipliers_cancel_to_the_lcm(a in monomial(), b in monomial()) {
        let (ma, mb) = a.lcm_multipliers(&b);
        prop_assert_eq!(a.mul(&ma), b.mul(&mb));
        prop_assert_eq!(a.mul(&ma), a.lcm(&b));
    }

    #[test]
    fn lcm_degree_matches_total_degree_of_lcm(a in monomial(), b in monomial()) {
        prop_assert_eq!(a.lcm_degree(&b), a.lcm(&b).total_degree());
    }

    #[test]
    fn divisors_of_a_monomial_all_divide_it(a in monomial()) {
        for d in a.divisors() {
            prop_assert!(d.divides(&a));
        }
    }
}
