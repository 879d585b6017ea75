//! Best-known expansion cost per state.

use std::collections::HashMap;

use colormaze_kernel::world::StateKey;

/// Records the cheapest cost at which each state has been expanded.
///
/// A state is expanded again only when reached strictly cheaper.
#[derive(Debug, Default)]
pub struct BestCostTable {
    best: HashMap<StateKey, u64>,
}

impl BestCostTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `cost` for `key` if it beats the recorded cost.
    ///
    /// Returns `true` if the caller should expand the state.
    pub fn record_if_better(&mut self, key: &StateKey, cost: u64) -> bool {
        if let Some(best) = self.best.get_mut(key) {
            if cost >= *best {
                return false;
            }
            *best = cost;
            return true;
        }
        self.best.insert(key.clone(), cost);
        true
    }

    /// The recorded cost for `key`, if it was ever expanded.
    #[must_use]
    pub fn best_cost(&self, key: &StateKey) -> Option<u64> {
        self.best.get(key).copied()
    }

    /// Number of distinct states expanded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
