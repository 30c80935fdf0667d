use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(item, priority)` pairs
///
/// Equal priorities pop in ascending item order, so searches that queue
/// vertex ids (Dijkstra) or whole paths (k-shortest candidates) stay
/// deterministic.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
