//! The sequential Buchberger engine, plus the helpers shared with the
//! concurrent variant: product criterion, S-polynomial construction via
//! cross-multiplication, and transformation-row bookkeeping.

use crate::basis::Basis;
use crate::error::{GrobnerError, GrobnerResult};
use crate::options::GrobnerOptions;
use crate::pair_queue::PairQueue;
use crate::reducer;
use arith::CoeffRing;
use monomial::MonomialOrder;
use poly::{Graded, Polynomial, Term};

/// `(m_a, m_b)` realising `m_a * lt(a) = m_b * lt(b) = lcm(lt(a), lt(b))`,
/// built by cross-multiplying the leading coefficients rather than
/// dividing one into the other. This is what lets the engine work over any
/// commutative ring exposing only `is_zero` and `maybe_div` — fields are
/// not required, since no coefficient inversion ever happens.
pub(crate) fn s_poly_multipliers<C: CoeffRing>(lt_a: &Term<C>, lt_b: &Term<C>) -> (Term<C>, Term<C>) {
    let l = lt_a.monomial.lcm(&lt_b.monomial);
    let m_a_monomial = lt_a
        .monomial
        .maybe_div(&l)
        .expect("a monomial always divides its lcm with another");
    let m_b_monomial = lt_b
        .monomial
        .maybe_div(&l)
        .expect("a monomial always divides its lcm with another");
    (
        Term::new(m_a_monomial, lt_b.coeff.clone()),
        Term::new(m_b_monomial, lt_a.coeff.clone()),
    )
}

/// Reduces `f` (lead-then-full, to fixpoint) against the live basis
/// elements named in `other_indices`, threading the transformation row
/// through: if `result[k] == Σ_j T_k[j] · input[j]` for each `other_indices[k]`,
/// and `f == Σ_j T_f[j] · input[j]`, the returned row satisfies the same
/// invariant for the reduced `f`.
pub(crate) fn reduce_against<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    f: &T,
    f_transform: Option<&[Polynomial<C, O>]>,
    other_indices: &[usize],
    basis: &Basis<T, C, O>,
    num_vars: usize,
    order: &O,
    num_inputs: usize,
    with_transformation: bool,
) -> (T, Option<Vec<Polynomial<C, O>>>) {
    let others: Vec<T> = other_indices.iter().map(|&ix| basis.get(ix).unwrap().clone()).collect();
    let (quotients, r) = reducer::divrem(f, &others, num_vars, order);
    if !with_transformation {
        return (r, None);
    }
    let f_t = f_transform.expect("transformation requested but row missing for an element");
    let mut new_row: Vec<Polynomial<C, O>> = f_t.to_vec();
    for (q, &ix) in quotients.iter().zip(other_indices.iter()) {
        let other_t = basis
            .transformation_row(ix)
            .expect("live basis element missing its transformation row");
        for k in 0..num_inputs {
            new_row[k] = new_row[k].sub(&q.mul(&other_t[k]));
        }
    }
    (r, Some(new_row))
}

/// Builds the initial basis from the raw inputs: drops zeros, seeds unit
/// transformation rows for survivors when requested, then inter-reduces
/// every survivor against the rest (lead-then-full), removing anything
/// that reduces to zero.
pub(crate) fn initialize_basis<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    inputs: Vec<T>,
    num_vars: usize,
    order: &O,
    with_transformation: bool,
) -> Basis<T, C, O> {
    let num_inputs = inputs.len();
    let mut basis = Basis::new();
    for (orig_ix, p) in inputs.into_iter().enumerate() {
        if p.is_zero() {
            continue;
        }
        let transform = if with_transformation {
            let mut row: Vec<Polynomial<C, O>> = (0..num_inputs).map(|_| Polynomial::zero(num_vars, order.clone())).collect();
            row[orig_ix] = Polynomial::constant(C::one(), num_vars, order.clone());
            Some(row)
        } else {
            None
        };
        basis.push(p, transform);
    }

    let initial_indices: Vec<usize> = basis.live_indices().collect();
    for ix in initial_indices {
        if !basis.is_alive(ix) {
            continue;
        }
        let others: Vec<usize> = basis.live_indices().filter(|&k| k != ix).collect();
        let f = basis.get(ix).unwrap().clone();
        let f_transform = basis.transformation_row(ix).map(|r| r.to_vec());
        let (reduced, new_transform) =
            reduce_against(&f, f_transform.as_deref(), &others, &basis, num_vars, order, num_inputs, with_transformation);
        if reduced.is_zero() {
            basis.remove(ix);
        } else {
            basis.replace(ix, reduced, new_transform);
        }
    }
    basis
}

/// Seeds the pair queue with every row-matching pair among the live basis
/// elements.
pub(crate) fn seed_pair_queue<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(basis: &Basis<T, C, O>) -> PairQueue {
    let mut queue = PairQueue::new();
    let live: Vec<usize> = basis.live_indices().collect();
    for (a, &i) in live.iter().enumerate() {
        for &j in &live[a + 1..] {
            if basis.leading_row(i) == basis.leading_row(j) {
                let l = basis.leading_monomial(i).unwrap().lcm(basis.leading_monomial(j).unwrap());
                queue.push(i, j, l.total_degree());
            }
        }
    }
    queue
}

/// Product criterion (Cox/Little/O'Shea Ch. 2 §9): `(i,j)` may be skipped
/// if some other live element with the same leading row divides `lcm(i,j)`
/// and neither `(i,l)` nor `(j,l)` is currently queued.
pub(crate) fn product_criterion_applies<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    basis: &Basis<T, C, O>,
    queue: &PairQueue,
    i: usize,
    j: usize,
    lcm: &monomial::Monomial,
    row: usize,
) -> bool {
    basis.live_indices().any(|l| {
        l != i
            && l != j
            && basis.leading_row(l) == Some(row)
            && basis.leading_monomial(l).unwrap().divides(lcm)
            && !queue.contains(i, l)
            && !queue.contains(j, l)
    })
}

/// Step (f): re-runs every other live element through lead-then-full
/// reduction using only the singleton hint `{new_ix}`; if that changes an
/// element, recurses with a full reduction against the whole basis.
/// Elements that become zero are removed.
pub(crate) fn inter_reduce_against_new<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    basis: &mut Basis<T, C, O>,
    new_ix: usize,
    num_vars: usize,
    order: &O,
    num_inputs: usize,
    with_transformation: bool,
) {
    let candidates: Vec<usize> = basis.live_indices().filter(|&k| k != new_ix).collect();
    for k in candidates {
        if !basis.is_alive(k) || !basis.is_alive(new_ix) {
            continue;
        }
        let f = basis.get(k).unwrap().clone();
        let f_transform = basis.transformation_row(k).map(|r| r.to_vec());
        let (after_hint, hint_transform) = reduce_against(
            &f,
            f_transform.as_deref(),
            &[new_ix],
            basis,
            num_vars,
            order,
            num_inputs,
            with_transformation,
        );
        if after_hint == f {
            continue;
        }
        if after_hint.is_zero() {
            basis.remove(k);
            continue;
        }
        let others: Vec<usize> = basis.live_indices().filter(|&x| x != k).collect();
        let (after_full, full_transform) = reduce_against(
            &after_hint,
            hint_transform.as_deref(),
            &others,
            basis,
            num_vars,
            order,
            num_inputs,
            with_transformation,
        );
        if after_full.is_zero() {
            basis.remove(k);
        } else {
            basis.replace(k, after_full, full_transform);
        }
    }
}

/// The sequential Buchberger driver (spec §4.G): discovers S-polynomials,
/// applies the product criterion, reduces, inserts, inter-reduces, and
/// (optionally) records the provenance matrix.
pub fn buchberger_sequential<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    inputs: Vec<T>,
    num_vars: usize,
    order: O,
    options: &GrobnerOptions,
) -> GrobnerResult<(Vec<T>, Option<Vec<Vec<Polynomial<C, O>>>>)> {
    let num_inputs = inputs.len();
    let mut basis = initialize_basis(inputs, num_vars, &order, options.with_transformation);
    let mut queue = seed_pair_queue(&basis);

    let mut loops: usize = 0;
    while let Some((i, j)) = queue.pop_alive(|ix| basis.is_alive(ix)) {
        if options.is_cancelled() {
            return Err(GrobnerError::Cancelled);
        }
        loops += 1;
        if loops % 1000 == 999 {
            log::debug!("buchberger_sequential: {} loops, basis size {}, queue size {}", loops, basis.live_count(), queue.len());
            if let Some(cb) = &options.progress_callback {
                cb(loops, basis.live_count(), queue.len());
            }
        }

        let lm_i = basis.leading_monomial(i).unwrap().clone();
        let lm_j = basis.leading_monomial(j).unwrap().clone();
        let row = basis.leading_row(i).unwrap();
        let lcm = lm_i.lcm(&lm_j);

        if let Some(max_degree) = options.max_degree {
            if lcm.total_degree() > max_degree {
                continue;
            }
        }
        if product_criterion_applies(&basis, &queue, i, j, &lcm, row) {
            continue;
        }

        let a = basis.get(i).unwrap().clone();
        let b = basis.get(j).unwrap().clone();
        let lt_a = Term::new(lm_i, a.leading_coeff().unwrap());
        let lt_b = Term::new(lm_j, b.leading_coeff().unwrap());
        let (m_a, m_b) = s_poly_multipliers(&lt_a, &lt_b);
        let s = a.scale(&m_a).sub(&b.scale(&m_b));

        let transform_s = if options.with_transformation {
            let ti = basis.transformation_row(i).unwrap();
            let tj = basis.transformation_row(j).unwrap();
            Some((0..num_inputs).map(|k| ti[k].scale(&m_a).sub(&tj[k].scale(&m_b))).collect())
        } else {
            None
        };

        if s.is_zero() {
            continue;
        }

        let others: Vec<usize> = basis.live_indices().collect();
        let (reduced, reduced_transform) =
            reduce_against(&s, transform_s.as_deref(), &others, &basis, num_vars, &order, num_inputs, options.with_transformation);

        if reduced.is_zero() {
            continue;
        }

        let new_ix = basis.push(reduced, reduced_transform);
        inter_reduce_against_new(&mut basis, new_ix, num_vars, &order, num_inputs, options.with_transformation);

        if basis.is_alive(new_ix) {
            for k in basis.live_indices().collect::<Vec<_>>() {
                if k == new_ix {
                    continue;
                }
                if basis.leading_row(k) == basis.leading_row(new_ix) {
                    let l = basis.leading_monomial(k).unwrap().lcm(basis.leading_monomial(new_ix).unwrap());
                    queue.push(k, new_ix, l.total_degree());
                }
            }
        }
    }

    Ok(collect_result(&basis, options.with_transformation))
}

pub(crate) fn collect_result<C: CoeffRing, O: MonomialOrder, T: Graded<C>>(
    basis: &Basis<T, C, O>,
    with_transformation: bool,
) -> (Vec<T>, Option<Vec<Vec<Polynomial<C, O>>>>) {
    let indices: Vec<usize> = basis.live_indices().collect();
    let elements = indices.iter().map(|&ix| basis.get(ix).unwrap().clone()).collect();
    let transformation = if with_transformation {
        Some(indices.iter().map(|&ix| basis.transformation_row(ix).unwrap().to_vec()).collect())
    } else {
        None
    };
    (elements, transformation)
}
