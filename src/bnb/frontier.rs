//! Best-first frontier.
//!
//! States live in a slot arena; the heap only holds `(bound, seq, slot)`
//! triples, so ordering never touches a matrix. Ties on the bound are
//! broken by insertion order, which keeps runs reproducible.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::state::SearchState;

#[derive(Debug, Clone, Copy)]
struct Entry {
    bound: f64,
    seq: u64,
    slot: usize,
}

// BinaryHeap is a max-heap: the "greatest" entry is the lowest bound,
// then the earliest insertion.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .bound
            .total_cmp(&self.bound)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority queue of open search states, lowest bound first.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    slots: Vec<Option<SearchState>>,
    free: Vec<usize>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, state: SearchState) {
        let bound = state.bound();
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(state);
                slot
            }
            None => {
                self.slots.push(Some(state));
                self.slots.len() - 1
            }
        };
        self.heap.push(Entry {
            bound,
            seq: self.next_seq,
            slot,
        });
        self.next_seq += 1;
    }

    /// Removes and returns the state with the lowest bound.
    pub fn pop(&mut self) -> Option<SearchState> {
        let entry = self.heap.pop()?;
        let state = self.slots[entry.slot].take();
        debug_assert!(state.is_some(), "frontier slot {} was empty", entry.slot);
        self.free.push(entry.slot);
        state
    }

    /// Keeps only the `keep` best entries. Returns the bounds of the
    /// dropped ones, worst first.
    pub fn truncate(&mut self, keep: usize) -> Vec<f64> {
        if self.heap.len() <= keep {
            return Vec::new();
        }
        // ascending in heap order: worst bounds first
        let mut entries = std::mem::take(&mut self.heap).into_sorted_vec();
        let excess = entries.len() - keep;
        let dropped = entries
            .drain(..excess)
            .map(|entry| {
                self.slots[entry.slot] = None;
                self.free.push(entry.slot);
                entry.bound
            })
            .collect();
        self.heap = BinaryHeap::from(entries);
        dropped
    }

    /// Number of open states whose bound is at least `threshold`.
    pub fn count_at_or_above(&self, threshold: f64) -> usize {
        self.heap.iter().filter(|e| e.bound >= threshold).count()
    }
}
