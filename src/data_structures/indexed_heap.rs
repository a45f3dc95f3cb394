use crate::{Error, Result};
use std::fmt::Debug;

/// An indexed binary min-heap over vertex indices with decrease-key.
///
/// Alongside the heap array it maintains `positions[v]`, the heap slot
/// currently holding vertex `v` (or `None` when absent). Keeping the two in
/// sync across every swap is what turns decrease-key into an O(log n)
/// sift-up instead of an O(n) scan. Keys are only ever decreased, never
/// increased; an update with a larger key is ignored.
#[derive(Debug)]
pub struct IndexedMinHeap<K>
where
    K: Ord + Copy + Debug,
{
    /// Heap slots as (vertex, key) pairs in min-heap order on key
    heap: Vec<(usize, K)>,

    /// Heap slot of each vertex, `None` when the vertex is absent
    positions: Vec<Option<usize>>,
}

impl<K> IndexedMinHeap<K>
where
    K: Ord + Copy + Debug,
{
    /// Creates an empty heap for vertices in `[0, capacity)`.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        })
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True if the vertex currently sits in the heap.
    pub fn contains(&self, vertex: usize) -> bool {
        self.positions.get(vertex).is_some_and(|p| p.is_some())
    }

    /// Current key of a vertex, if present.
    pub fn key_of(&self, vertex: usize) -> Option<K> {
        let pos = (*self.positions.get(vertex)?)?;
        Some(self.heap[pos].1)
    }

    /// Inserts a vertex, or lowers its key if the new key is strictly
    /// smaller. Larger keys are ignored (decrease-key only). Out-of-range
    /// vertices and inserts into a full heap are silently dropped; neither
    /// occurs when the heap is sized to the graph's vertex count.
    pub fn push_or_decrease(&mut self, vertex: usize, key: K) {
        if vertex >= self.positions.len() {
            return;
        }

        if let Some(pos) = self.positions[vertex] {
            if key < self.heap[pos].1 {
                self.heap[pos].1 = key;
                self.sift_up(pos);
            }
            return;
        }

        if self.heap.len() >= self.positions.len() {
            return;
        }
        self.heap.push((vertex, key));
        self.positions[vertex] = Some(self.heap.len() - 1);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the minimum-key entry, or `None` when empty.
    pub fn pop(&mut self) -> Option<(usize, K)> {
        let min = *self.heap.first()?;
        self.positions[min.0] = None;

        let last = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.positions[last.0] = Some(0);
            self.sift_down(0);
        }

        Some(min)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i].0] = Some(i);
        self.positions[self.heap[j].0] = Some(j);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[parent].1 <= self.heap[idx].1 {
                break;
            }
            self.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < self.heap.len() && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap(idx, smallest);
            idx = smallest;
        }
    }
}
