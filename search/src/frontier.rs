//! Indexed best-first frontier with lazy deletion.
//!
//! The heap never supports arbitrary-position updates. Replacing a state's
//! entry invalidates the old one in place (its node is dropped from the slot
//! map) and pushes a fresh entry; stale heap entries are discarded when they
//! surface in [`IndexedFrontier::extract_min`]. Only the most recently
//! inserted entry for a state key is ever returned.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use colormaze_kernel::world::StateKey;

use crate::error::SearchError;
use crate::node::SearchNode;

/// The frontier ordering key: `(priority, sequence)`.
///
/// Lower priority first; ties broken by older insertion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: u64,
    pub sequence: u64,
}

/// What [`IndexedFrontier::insert_or_update`] did with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierUpdate {
    /// No live entry existed for the state.
    Inserted,
    /// A live entry with equal or worse priority was invalidated.
    Replaced,
    /// A live entry with strictly better priority was kept; the node was dropped.
    KeptExisting,
}

/// Priority queue of search nodes, deduplicated by state key.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop the
/// lowest `(priority, sequence)` first.
#[derive(Debug, Default)]
pub struct IndexedFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    /// Live nodes by insertion sequence. Invalidated entries have no slot.
    slots: HashMap<u64, SearchNode>,
    /// Live entry per state key.
    live: HashMap<StateKey, FrontierKey>,
    next_sequence: u64,
    high_water: usize,
}

impl IndexedFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` at its priority, replacing any live entry for the same
    /// state unless that entry is strictly better.
    pub fn insert_or_update(&mut self, node: SearchNode) -> FrontierUpdate {
        let mut outcome = FrontierUpdate::Inserted;
        if let Some(&existing) = self.live.get(node.key()) {
            if existing.priority < node.priority {
                return FrontierUpdate::KeptExisting;
            }
            self.slots.remove(&existing.sequence);
            outcome = FrontierUpdate::Replaced;
        }

        let key = FrontierKey {
            priority: node.priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        self.live.insert(node.key().clone(), key);
        self.slots.insert(key.sequence, node);
        self.heap.push(Reverse(key));
        self.high_water = self.high_water.max(self.live.len());
        outcome
    }

    /// Remove and return the live node with the lowest `(priority, sequence)`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if no live entry remains.
    pub fn extract_min(&mut self) -> Result<SearchNode, SearchError> {
        while let Some(Reverse(key)) = self.heap.pop() {
            if let Some(node) = self.slots.remove(&key.sequence) {
                self.live.remove(node.key());
                return Ok(node);
            }
        }
        Err(SearchError::EmptyFrontier)
    }

    /// Whether a live entry exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &StateKey) -> bool {
        self.live.contains_key(key)
    }

    /// Priority of the live entry for `key`.
    #[must_use]
    pub fn priority_of(&self, key: &StateKey) -> Option<u64> {
        self.live.get(key).map(|k| k.priority)
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no live entries remain. Invalidated entries do not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Invalidated entries still physically in the heap.
    #[must_use]
    pub fn stale_entries(&self) -> usize {
        self.heap.len() - self.live.len()
    }

    /// High-water mark of the live size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
