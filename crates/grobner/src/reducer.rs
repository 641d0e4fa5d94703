//! Multivariate division: `leaddivrem`, the full `divrem`, and the
//! `rem`/`divrem` composites built from them.
//!
//! Every primitive here is generic over [`Graded<C>`], so the same code
//! reduces plain polynomials (`k = 1`) and free-module elements (`k > 1`)
//! without duplication, per the capability-trait design.

use arith::CoeffRing;
use monomial::{Monomial, MonomialOrder};
use poly::{Graded, Polynomial, Term};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Outcome of attempting one reduction step. Stands in for the source's
/// "same object back means unchanged" sentinel, which does not translate
/// to a value-type language: an explicit tri-state is used instead.
pub enum ReduceStep<T> {
    Unchanged,
    Reduced(T),
}

/// Attempts to cancel the leading term of `f` using `g`. Succeeds only when
/// `g`'s leading row matches `f`'s, `lm(g) | lm(f)`, and the leading
/// coefficients divide exactly; returns the single quotient term realising
/// the cancellation plus the reduced object.
pub fn leaddivrem<C: CoeffRing, T: Graded<C>>(f: &T, g: &T) -> (Option<Term<C>>, ReduceStep<T>) {
    if f.is_zero() || g.is_zero() {
        return (None, ReduceStep::Unchanged);
    }
    if f.leading_row() != g.leading_row() {
        return (None, ReduceStep::Unchanged);
    }
    let lead_f = Term::new(f.leading_monomial().unwrap(), f.leading_coeff().unwrap());
    let lead_g = Term::new(g.leading_monomial().unwrap(), g.leading_coeff().unwrap());
    match lead_f.maybe_div(&lead_g) {
        Some(q) => {
            let reduced = f.sub(&g.scale(&q));
            (Some(q), ReduceStep::Reduced(reduced))
        }
        None => (None, ReduceStep::Unchanged),
    }
}

/// Scans every term of `f` (not just the leading one) for one divisible by
/// `lm(g)` in `g`'s leading row, and cancels the first such term found.
/// Used for tail reduction once lead reduction has reached a fixpoint.
pub fn tail_divrem<C: CoeffRing, T: Graded<C>>(f: &T, g: &T) -> (Option<Term<C>>, ReduceStep<T>) {
    if f.is_zero() || g.is_zero() {
        return (None, ReduceStep::Unchanged);
    }
    let g_row = g.leading_row();
    let lead_g = Term::new(g.leading_monomial().unwrap(), g.leading_coeff().unwrap());
    for (row, monomial, coeff) in f.all_terms() {
        if row != g_row {
            continue;
        }
        let term = Term::new(monomial, coeff);
        if let Some(q) = term.maybe_div(&lead_g) {
            let reduced = f.sub(&g.scale(&q));
            return (Some(q), ReduceStep::Reduced(reduced));
        }
    }
    (None, ReduceStep::Unchanged)
}

/// Groups `basis` by leading row and sorts each row's `(leading_monomial,
/// index)` pairs ascending under `order` — the array the fast divisor-
/// lookup path (`_grb_red`) binary-searches. Built once per `lead_reduce_to_fixpoint`/
/// `tail_reduce_to_fixpoint` call (the basis slice doesn't change across
/// that call's iterations, only `current` does), not once per iteration.
fn divisor_index_by_row<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    basis: &[T],
    order: &O,
) -> HashMap<usize, Vec<(Monomial, usize)>> {
    let mut by_row: HashMap<usize, Vec<(Monomial, usize)>> = HashMap::new();
    for (i, g) in basis.iter().enumerate() {
        if g.is_zero() {
            continue;
        }
        by_row
            .entry(g.leading_row())
            .or_default()
            .push((g.leading_monomial().unwrap(), i));
    }
    for group in by_row.values_mut() {
        group.sort_by(|a, b| order.compare(&a.0, &b.0));
    }
    by_row
}

/// Enumerates the divisors of `lm` (per spec's `_grb_red`: the finite
/// product over `lm`'s nonzero exponents) and binary-searches `sorted` —
/// a `(leading_monomial, index)` array already sorted ascending under
/// `order` — for each one, in turn. A monomial match alone isn't enough to
/// guarantee a usable reduction over a non-field coefficient ring (the
/// leading coefficients might not divide exactly), so every matching
/// index (there can be several sharing a monomial) is offered to `usable`
/// before moving on to the next divisor; the search stops at the first
/// divisor with a usable match.
fn fast_find_divisor<O: MonomialOrder>(
    lm: &Monomial,
    sorted: &[(Monomial, usize)],
    order: &O,
    mut usable: impl FnMut(usize) -> bool,
) -> Option<usize> {
    for d in lm.divisors() {
        let Ok(pos) = sorted.binary_search_by(|(m, _)| order.compare(m, &d)) else {
            continue;
        };
        let mut lo = pos;
        while lo > 0 && order.compare(&sorted[lo - 1].0, &d) == Ordering::Equal {
            lo -= 1;
        }
        let mut i = lo;
        while i < sorted.len() && order.compare(&sorted[i].0, &d) == Ordering::Equal {
            if usable(sorted[i].1) {
                return Some(sorted[i].1);
            }
            i += 1;
        }
    }
    None
}

/// Greedily lead-reduces `f` against `basis`, using the fast divisor-
/// lookup path to pick a candidate index instead of scanning `basis`
/// linearly. Accumulates the quotient contributed to each basis index
/// into `quotients[i]`. Stops when no element of `basis` can cancel the
/// current leading term.
fn lead_reduce_to_fixpoint<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    f: &T,
    basis: &[T],
    num_vars: usize,
    order: &O,
    quotients: &mut [Polynomial<C, O>],
) -> T {
    let by_row = divisor_index_by_row(basis, order);
    let mut current = f.clone();
    loop {
        if current.is_zero() {
            return current;
        }
        let lm = current.leading_monomial().unwrap();
        let row = current.leading_row();
        let found = by_row
            .get(&row)
            .and_then(|group| fast_find_divisor(&lm, group, order, |i| matches!(leaddivrem(&current, &basis[i]).1, ReduceStep::Reduced(_))));
        match found {
            Some(i) => {
                let (q, step) = leaddivrem(&current, &basis[i]);
                let ReduceStep::Reduced(next) = step else {
                    unreachable!("fast_find_divisor only returns indices validated as usable")
                };
                quotients[i] = quotients[i].add(&Polynomial::from_terms(vec![q.unwrap()], num_vars, order.clone()));
                current = next;
            }
            None => return current,
        }
    }
}

/// Greedily full-reduces `f` against `basis` (every term, not just the
/// leading one), using the fast divisor-lookup path per candidate term
/// instead of scanning `basis` linearly for each one.
fn tail_reduce_to_fixpoint<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    f: &T,
    basis: &[T],
    num_vars: usize,
    order: &O,
    quotients: &mut [Polynomial<C, O>],
) -> T {
    let by_row = divisor_index_by_row(basis, order);
    let mut current = f.clone();
    loop {
        if current.is_zero() {
            return current;
        }
        let found = current.all_terms().into_iter().find_map(|(row, monomial, _)| {
            by_row
                .get(&row)
                .and_then(|group| fast_find_divisor(&monomial, group, order, |i| matches!(tail_divrem(&current, &basis[i]).1, ReduceStep::Reduced(_))))
        });
        match found {
            Some(i) => {
                let (q, step) = tail_divrem(&current, &basis[i]);
                let ReduceStep::Reduced(next) = step else {
                    unreachable!("fast_find_divisor only returns indices validated as usable")
                };
                quotients[i] = quotients[i].add(&Polynomial::from_terms(vec![q.unwrap()], num_vars, order.clone()));
                current = next;
            }
            None => return current,
        }
    }
}

/// `rem(f, G)`: lead-reduce to fixpoint, then full-reduce to fixpoint,
/// discarding the accumulated quotients.
pub fn rem<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(f: &T, basis: &[T], num_vars: usize, order: &O) -> T {
    let mut scratch: Vec<Polynomial<C, O>> = basis.iter().map(|_| Polynomial::zero(num_vars, order.clone())).collect();
    let after_lead = lead_reduce_to_fixpoint(f, basis, num_vars, order, &mut scratch);
    tail_reduce_to_fixpoint(&after_lead, basis, num_vars, order, &mut scratch)
}

/// `divrem(f, G)`: same two-phase reduction as `rem`, also returning the
/// quotient polynomials so that `r + Σ q_i · G[i] = f`.
pub fn divrem<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    f: &T,
    basis: &[T],
    num_vars: usize,
    order: &O,
) -> (Vec<Polynomial<C, O>>, T) {
    let mut quotients: Vec<Polynomial<C, O>> = basis.iter().map(|_| Polynomial::zero(num_vars, order.clone())).collect();
    let after_lead = lead_reduce_to_fixpoint(f, basis, num_vars, order, &mut quotients);
    let r = tail_reduce_to_fixpoint(&after_lead, basis, num_vars, order, &mut quotients);
    (quotients, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith::Rational;
    use monomial::GRevLex;
    use poly::Polynomial as P;

    fn poly(terms: Vec<(Vec<u32>, i64)>, num_vars: usize) -> P<Rational, GRevLex> {
        P::from_terms(
            terms
                .into_iter()
                .map(|(e, c)| Term::new(Monomial::new(e), Rational::new(c, 1)))
                .collect(),
            num_vars,
            GRevLex,
        )
    }

    #[test]
    fn rem_against_empty_basis_is_identity() {
        let f = poly(vec![(vec![1], 1)], 1);
        let r = rem::<Rational, GRevLex, P<Rational, GRevLex>>(&f, &[], 1, &GRevLex);
        assert_eq!(r, f);
    }

    #[test]
    fn divrem_invariant_holds_for_a_simple_reduction() {
        // f = x^2, g = x  =>  q = x, r = 0
        let f = poly(vec![(vec![2], 1)], 1);
        let g = poly(vec![(vec![1], 1)], 1);
        let (q, r) = divrem::<Rational, GRevLex, P<Rational, GRevLex>>(&f, &[g.clone()], 1, &GRevLex);
        assert!(r.is_zero());
        let reconstructed = r.add(&q[0].mul(&g));
        assert_eq!(reconstructed, f);
    }

    #[test]
    fn rem_singleton_unit_basis_annihilates_everything() {
        let unit = poly(vec![(vec![0], 1)], 1);
        let f = poly(vec![(vec![3], 1), (vec![1], 2)], 1);
        let r = rem::<Rational, GRevLex, P<Rational, GRevLex>>(&f, &[unit], 1, &GRevLex);
        assert!(r.is_zero());
    }
}
