//! Thread-parallel Buchberger engine with the reader–writer-lock
//! snapshot/reread pattern (spec §4.I).
//!
//! One writer at a time, many readers, over the basis state; the pair
//! queue has its own mutex. Workers pop a pair, snapshot the basis under
//! the read lock, compute and reduce the S-polynomial without holding any
//! lock, then re-acquire the write lock and check whether elements
//! inserted by other workers since the snapshot can reduce the result
//! further — looping on a fresh snapshot until none can.

use crate::basis::Basis;
use crate::engine::{collect_result, inter_reduce_against_new, initialize_basis, product_criterion_applies, reduce_against, s_poly_multipliers, seed_pair_queue};
use crate::error::{GrobnerError, GrobnerResult};
use crate::options::GrobnerOptions;
use crate::pair_queue::PairQueue;
use arith::CoeffRing;
use monomial::MonomialOrder;
use parking_lot::{Mutex, RwLock};
use poly::{Graded, Polynomial, Term};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn buchberger_parallel<C, O, T>(
    inputs: Vec<T>,
    num_vars: usize,
    order: O,
    options: &GrobnerOptions,
) -> GrobnerResult<(Vec<T>, Option<Vec<Vec<Polynomial<C, O>>>>)>
where
    C: CoeffRing + Send + Sync + 'static,
    O: MonomialOrder + Send + Sync + 'static,
    T: Graded<C> + Send + Sync + 'static,
{
    let num_inputs = inputs.len();
    let basis = initialize_basis(inputs, num_vars, &order, options.with_transformation);
    let queue = seed_pair_queue(&basis);

    let basis = Arc::new(RwLock::new(basis));
    let queue = Arc::new(Mutex::new(queue));
    let loops = Arc::new(AtomicUsize::new(0));
    let busy = Arc::new(AtomicUsize::new(0));
    let threads = options.threads_or_default();

    let mut handles = Vec::with_capacity(threads);
    for _ in 0..threads {
        let basis = Arc::clone(&basis);
        let queue = Arc::clone(&queue);
        let loops = Arc::clone(&loops);
        let busy = Arc::clone(&busy);
        let order = order.clone();
        let options = options.clone();
        handles.push(std::thread::spawn(move || {
            worker_loop(basis, queue, loops, busy, order, num_vars, num_inputs, options)
        }));
    }

    let mut first_err = None;
    for handle in handles {
        let outcome = handle.join().expect("grobner worker thread panicked");
        if let Err(e) = outcome {
            first_err.get_or_insert(e);
        }
    }
    if let Some(e) = first_err {
        return Err(e);
    }
    if options.is_cancelled() {
        return Err(GrobnerError::Cancelled);
    }

    let basis = basis.read();
    Ok(collect_result(&basis, options.with_transformation))
}

fn worker_loop<C, O, T>(
    basis: Arc<RwLock<Basis<T, C, O>>>,
    queue: Arc<Mutex<PairQueue>>,
    loops: Arc<AtomicUsize>,
    busy: Arc<AtomicUsize>,
    order: O,
    num_vars: usize,
    num_inputs: usize,
    options: GrobnerOptions,
) -> GrobnerResult<()>
where
    C: CoeffRing,
    O: MonomialOrder,
    T: Graded<C>,
{
    loop {
        if options.is_cancelled() {
            return Err(GrobnerError::Cancelled);
        }

        let pair = {
            let basis_guard = basis.read();
            let mut queue_guard = queue.lock();
            queue_guard.pop_alive(|ix| basis_guard.is_alive(ix))
        };

        let (i, j) = match pair {
            Some(p) => p,
            None => {
                if busy.load(Ordering::SeqCst) == 0 {
                    return Ok(());
                }
                std::thread::yield_now();
                continue;
            }
        };

        busy.fetch_add(1, Ordering::SeqCst);
        let outcome = process_pair(&basis, &queue, i, j, &order, num_vars, num_inputs, &options, &loops);
        busy.fetch_sub(1, Ordering::SeqCst);
        outcome?;
    }
}

/// One worker iteration over a single popped pair: snapshot, reduce
/// outside the lock, then re-check and possibly re-snapshot against
/// elements inserted meanwhile before publishing.
fn process_pair<C, O, T>(
    basis: &Arc<RwLock<Basis<T, C, O>>>,
    queue: &Arc<Mutex<PairQueue>>,
    i: usize,
    j: usize,
    order: &O,
    num_vars: usize,
    num_inputs: usize,
    options: &GrobnerOptions,
    loops: &Arc<AtomicUsize>,
) -> GrobnerResult<()>
where
    C: CoeffRing,
    O: MonomialOrder,
    T: Graded<C>,
{
    let n = loops.fetch_add(1, Ordering::Relaxed) + 1;
    if n % 1000 == 999 {
        let (size, qlen) = {
            let basis_guard = basis.read();
            (basis_guard.live_count(), queue.lock().len())
        };
        log::debug!("buchberger_parallel: {} loops, basis size {}, queue size {}", n, size, qlen);
        if let Some(cb) = &options.progress_callback {
            cb(n, size, qlen);
        }
    }

    // Snapshot: elements alive right now, and the data needed to decide
    // the product criterion and build the S-polynomial.
    let (a, b, lt_a, lt_b, row, snapshot_indices, snapshot_bound, transform_i, transform_j) = {
        let basis_guard = basis.read();
        if !basis_guard.is_alive(i) || !basis_guard.is_alive(j) {
            return Ok(());
        }
        let lm_i = basis_guard.leading_monomial(i).unwrap().clone();
        let lm_j = basis_guard.leading_monomial(j).unwrap().clone();
        let row = basis_guard.leading_row(i).unwrap();
        let lcm = lm_i.lcm(&lm_j);
        if let Some(max_degree) = options.max_degree {
            if lcm.total_degree() > max_degree {
                return Ok(());
            }
        }
        let queue_guard = queue.lock();
        if product_criterion_applies(&basis_guard, &queue_guard, i, j, &lcm, row) {
            return Ok(());
        }
        drop(queue_guard);

        let a = basis_guard.get(i).unwrap().clone();
        let b = basis_guard.get(j).unwrap().clone();
        let lt_a = Term::new(lm_i, a.leading_coeff().unwrap());
        let lt_b = Term::new(lm_j, b.leading_coeff().unwrap());
        let snapshot: Vec<usize> = basis_guard.live_indices().collect();
        let bound = basis_guard.entries_len();
        let ti = basis_guard.transformation_row(i).map(|r| r.to_vec());
        let tj = basis_guard.transformation_row(j).map(|r| r.to_vec());
        (a, b, lt_a, lt_b, row, snapshot, bound, ti, tj)
    };
    let _ = row;

    let (m_a, m_b) = s_poly_multipliers(&lt_a, &lt_b);
    let mut s = a.scale(&m_a).sub(&b.scale(&m_b));
    let mut s_transform = if options.with_transformation {
        let ti = transform_i.unwrap();
        let tj = transform_j.unwrap();
        Some((0..num_inputs).map(|k| ti[k].scale(&m_a).sub(&tj[k].scale(&m_b))).collect::<Vec<_>>())
    } else {
        None
    };

    if s.is_zero() {
        return Ok(());
    }

    // Reduce against the snapshot without holding any lock; if other
    // workers appended elements since the snapshot that can reduce the
    // result further, take a fresh snapshot including them and reduce
    // fully again, repeating until a read finds nothing new to fold in.
    let mut reduce_set = snapshot_indices;
    let mut bound = snapshot_bound;
    loop {
        let (reduced, reduced_transform) = {
            let basis_guard = basis.read();
            reduce_against(&s, s_transform.as_deref(), &reduce_set, &basis_guard, num_vars, order, num_inputs, options.with_transformation)
        };
        s = reduced;
        s_transform = reduced_transform;
        if s.is_zero() {
            return Ok(());
        }

        // Other workers may have appended elements since the last snapshot
        // (tracked in stable-index/dense space via `entries_len`, which
        // only grows — unlike `live_count`, it can't be thrown off by a
        // tombstone); check whether any of them can reduce the result.
        let basis_guard = basis.read();
        let new_bound = basis_guard.entries_len();
        if new_bound == bound {
            break;
        }
        let new_since_snapshot: Vec<usize> = (bound..new_bound).filter(|&ix| basis_guard.is_alive(ix)).collect();
        let still_reducible = new_since_snapshot
            .iter()
            .any(|&ix| basis_guard.get(ix).map(|g| crate::reducer::leaddivrem(&s, g).0.is_some()).unwrap_or(false));
        if !still_reducible {
            bound = new_bound;
            break;
        }
        reduce_set = basis_guard.live_indices().collect();
        bound = new_bound;
        drop(basis_guard);
    }

    if s.is_zero() {
        return Ok(());
    }

    // Publish: acquire the write lock, insert, inter-reduce, re-sort,
    // enqueue new pairs.
    let mut basis_guard = basis.write();
    let new_ix = basis_guard.push(s, s_transform);
    inter_reduce_against_new(&mut basis_guard, new_ix, num_vars, order, num_inputs, options.with_transformation);
    if basis_guard.is_alive(new_ix) {
        let live: Vec<usize> = basis_guard.live_indices().collect();
        let mut queue_guard = queue.lock();
        for k in live {
            if k == new_ix {
                continue;
            }
            if basis_guard.leading_row(k) == basis_guard.leading_row(new_ix) {
                let l = basis_guard.leading_monomial(k).unwrap().lcm(basis_guard.leading_monomial(new_ix).unwrap());
                queue_guard.push(k, new_ix, l.total_degree());
            }
        }
    }
    Ok(())
}
