//! Priority queue over unordered pairs of stable indices, keyed by
//! lcm-degree, with a membership mirror for the product criterion's O(1)
//! "is this pair already queued" check.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueuedPair {
    degree: u32,
    pair: (usize, usize),
}

impl Ord for QueuedPair {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.degree.cmp(&other.degree).then(self.pair.cmp(&other.pair))
    }
}
impl PartialOrd for QueuedPair {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of `(i, j)` pairs keyed by lcm-degree, plus the
/// membership set the product criterion consults.
pub struct PairQueue {
    heap: BinaryHeap<Reverse<QueuedPair>>,
    members: HashSet<(usize, usize)>,
}

impl PairQueue {
    pub fn new() -> Self {
        PairQueue {
            heap: BinaryHeap::new(),
            members: HashSet::new(),
        }
    }

    fn canonical(i: usize, j: usize) -> (usize, usize) {
        if i < j {
            (i, j)
        } else {
            (j, i)
        }
    }

    /// Inserts `(i, j)` with the given lcm-degree key. Does nothing if the
    /// pair is already queued.
    pub fn push(&mut self, i: usize, j: usize, degree: u32) {
        let pair = Self::canonical(i, j);
        if self.members.contains(&pair) {
            return;
        }
        self.members.insert(pair);
        self.heap.push(Reverse(QueuedPair { degree, pair }));
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.members.contains(&Self::canonical(i, j))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pops pairs until it finds one whose both components are still
    /// alive (per `is_alive`), or the queue is exhausted.
    pub fn pop_alive(&mut self, is_alive: impl Fn(usize) -> bool) -> Option<(usize, usize)> {
        while let Some(Reverse(top)) = self.heap.pop() {
            self.members.remove(&top.pair);
            let (i, j) = top.pair;
            if is_alive(i) && is_alive(j) {
                return Some((i, j));
            }
        }
        None
    }
}

impl Default for PairQueue {
    fn default() -> Self {
        Self::new()
    }
}
