//! Stable-index bookkeeping for the growing basis.
//!
//! Elements are never moved once inserted; a removal (during
//! inter-reduction) tombstones the slot instead of shifting later indices.
//! The pair queue stores these stable indices directly, so a dead index is
//! simply absent from `entries` and every reader must check aliveness
//! before dereferencing — the "out-of-bounds through a stale view" hazard
//! the design explicitly calls out.

use arith::CoeffRing;
use monomial::{Monomial, MonomialOrder};
use poly::{Graded, Polynomial};

struct Entry<T, C: CoeffRing, O: MonomialOrder> {
    element: T,
    leading_monomial: Monomial,
    /// Row `i` of the provenance matrix: `element == Σ_j transformation[j] · input[j]`.
    /// A row vector of polynomials over `C` rather than bare scalars, since
    /// S-polynomial and reduction quotients carry monomial factors.
    /// Present only when the caller asked for `with_transformation`.
    transformation: Option<Vec<Polynomial<C, O>>>,
}

pub struct Basis<T, C: CoeffRing, O: MonomialOrder> {
    entries: Vec<Option<Entry<T, C, O>>>,
}

impl<T: Graded<C>, C: CoeffRing, O: MonomialOrder> Basis<T, C, O> {
    pub fn new() -> Self {
        Basis { entries: Vec::new() }
    }

    /// Inserts a nonzero element, returning its stable index. Panics if
    /// `element.is_zero()` — callers filter zeros before insertion.
    pub fn push(&mut self, element: T, transformation: Option<Vec<Polynomial<C, O>>>) -> usize {
        assert!(!element.is_zero(), "the basis never stores a zero element");
        let leading_monomial = element.leading_monomial().expect("nonzero element has a leading monomial");
        let ix = self.entries.len();
        self.entries.push(Some(Entry {
            element,
            leading_monomial,
            transformation,
        }));
        ix
    }

    pub fn is_alive(&self, ix: usize) -> bool {
        self.entries.get(ix).map(|e| e.is_some()).unwrap_or(false)
    }

    pub fn get(&self, ix: usize) -> Option<&T> {
        self.entries.get(ix)?.as_ref().map(|e| &e.element)
    }

    pub fn leading_monomial(&self, ix: usize) -> Option<&Monomial> {
        self.entries.get(ix)?.as_ref().map(|e| &e.leading_monomial)
    }

    pub fn leading_row(&self, ix: usize) -> Option<usize> {
        self.get(ix).map(|e| e.leading_row())
    }

    pub fn transformation_row(&self, ix: usize) -> Option<&[Polynomial<C, O>]> {
        self.entries.get(ix)?.as_ref()?.transformation.as_deref()
    }

    /// Removes a live entry, tombstoning its slot; its stable index is
    /// never reused.
    pub fn remove(&mut self, ix: usize) {
        if let Some(slot) = self.entries.get_mut(ix) {
            *slot = None;
        }
    }

    /// Replaces a live entry's element/transformation in place, keeping its
    /// stable index (used when an existing basis element is inter-reduced
    /// against a newly inserted one, rather than removed and re-pushed).
    pub fn replace(&mut self, ix: usize, element: T, transformation: Option<Vec<Polynomial<C, O>>>) {
        assert!(!element.is_zero(), "replace with a zero element; call remove instead");
        let leading_monomial = element.leading_monomial().expect("nonzero element has a leading monomial");
        if let Some(slot) = self.entries.get_mut(ix) {
            *slot = Some(Entry {
                element,
                leading_monomial,
                transformation,
            });
        }
    }

    pub fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|_| i))
    }

    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn live_elements(&self) -> Vec<(usize, &T)> {
        self.live_indices().map(|i| (i, self.get(i).unwrap())).collect()
    }

    /// The stable-index/dense-space length: `entries.len()`, including
    /// tombstoned slots. Stable indices are assigned monotonically by
    /// `push`, so this is the right boundary for "new since snapshot"
    /// checks — unlike `live_count`, it never shrinks when a slot is
    /// tombstoned.
    pub fn entries_len(&self) -> usize {
        self.entries.len()
    }
}

impl<T: Graded<C>, C: CoeffRing, O: MonomialOrder> Default for Basis<T, C, O> {
    fn default() -> Self {
        Self::new()
    }
}
