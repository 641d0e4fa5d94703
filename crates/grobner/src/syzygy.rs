//! Syzygy computation: for a Gröbner basis `G`, a generating set of the
//! module of relations `{ s : Σ s_k · G[k] = 0 }`.
//!
//! Built directly from the Buchberger trace: every S-polynomial of a pair
//! `(i, j)` in a Gröbner basis reduces to zero, and the quotients recorded
//! along the way witness a relation `m_a · G[i] - m_b · G[j] - Σ q_k · G[k] = 0`.

use crate::engine::s_poly_multipliers;
use crate::error::{GrobnerError, GrobnerResult};
use crate::reducer;
use arith::CoeffRing;
use monomial::MonomialOrder;
use poly::{Graded, ModuleElement, Polynomial, Term};

/// Computes a generating set of the syzygy module of `g`, which must
/// already be a Gröbner basis: for every pair `(i, j)` this recovers the
/// syzygy witnessed by the S-polynomial's reduction to zero, then reduces
/// each syzygy against the ones already collected to drop redundancy.
///
/// Returns [`GrobnerError::NotAGroebnerBasis`] if some S-polynomial does
/// not reduce to zero — `g` was not in fact a Gröbner basis.
pub fn syzygies<C, O, T>(g: &[T], num_vars: usize, order: &O) -> GrobnerResult<Vec<ModuleElement<C, O>>>
where
    C: CoeffRing,
    O: MonomialOrder,
    T: Graded<C>,
{
    if g.is_empty() {
        return Err(GrobnerError::EmptyInput);
    }
    let k = g.len();
    let mut raw: Vec<ModuleElement<C, O>> = Vec::new();

    for i in 0..k {
        for j in (i + 1)..k {
            if g[i].is_zero() || g[j].is_zero() {
                continue;
            }
            if g[i].leading_row() != g[j].leading_row() {
                continue;
            }
            let lt_a = Term::new(g[i].leading_monomial().unwrap(), g[i].leading_coeff().unwrap());
            let lt_b = Term::new(g[j].leading_monomial().unwrap(), g[j].leading_coeff().unwrap());
            let (m_a, m_b) = s_poly_multipliers(&lt_a, &lt_b);
            let s = g[i].scale(&m_a).sub(&g[j].scale(&m_b));

            let mut row: Vec<Polynomial<C, O>> = (0..k).map(|_| Polynomial::zero(num_vars, order.clone())).collect();
            row[i] = row[i].sub(&Polynomial::from_terms(vec![m_a], num_vars, order.clone()));
            row[j] = row[j].add(&Polynomial::from_terms(vec![m_b], num_vars, order.clone()));

            if s.is_zero() {
                raw.push(ModuleElement::new(row));
                continue;
            }

            let (quotients, r) = reducer::divrem(&s, g, num_vars, order);
            if !r.is_zero() {
                return Err(GrobnerError::NotAGroebnerBasis(i, j));
            }
            for (q_ix, q) in quotients.into_iter().enumerate() {
                row[q_ix] = row[q_ix].sub(&q);
            }
            raw.push(ModuleElement::new(row));
        }
    }

    let mut reduced: Vec<ModuleElement<C, O>> = Vec::new();
    for syz in raw {
        let r = reducer::rem(&syz, &reduced, num_vars, order);
        if !r.is_zero() {
            reduced.push(r);
        }
    }
    Ok(reduced)
}
