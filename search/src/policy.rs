//! Search policy types.

use colormaze_kernel::world::{StateKey, World};

use crate::error::SearchError;

/// Search budget and dedup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` means unbounded.
    pub max_expansions: Option<u64>,
    /// Which state identity collapses frontier entries and visited records.
    pub dedup_key: DedupKey,
}

impl SearchPolicy {
    /// Check that the policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            dedup_key: DedupKey::Configuration,
        }
    }
}

/// Dedup key policy: which world fields identify a search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DedupKey {
    /// Grid, agent position and cell counts. States reached along different
    /// paths collapse and keep the cheapest cost, and the state space is
    /// finite, so unsolvable mazes exhaust the frontier. Default.
    Configuration,
    /// Configuration plus extra traversals. Cost is then a function of the
    /// key, so dominance never re-expands anything, and the state space is
    /// unbounded: only use on mazes known to be solvable.
    FullState,
}

impl DedupKey {
    /// The key identifying `world` under this policy.
    #[must_use]
    pub fn key_of(self, world: &World) -> StateKey {
        match self {
            Self::Configuration => world.configuration_key(),
            Self::FullState => world.state_key(),
        }
    }

    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::FullState => "full_state",
        }
    }
}
